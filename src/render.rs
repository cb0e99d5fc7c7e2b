use std::io::{self, Write};

use crate::script::{Script, color::Color};

/// Consumes a finished [`Script`].
pub trait Renderer {
    /// Draws the script.
    ///
    /// # Errors
    /// Whatever the output sink reports.
    fn render(&mut self, script: &Script) -> io::Result<()>;
}

/// Writes a plain-text listing of a script: the axis settings, then every
/// annotation in declaration order.
///
/// # Example
/// ```
/// use graph_gen::{
///     render::{ListingRenderer, Renderer},
///     script::Script,
/// };
///
/// let script = Script::parse("point [1,2]!red").unwrap();
/// let mut renderer = ListingRenderer::new(Vec::new());
/// renderer.render(&script).unwrap();
///
/// let listing = String::from_utf8(renderer.into_inner()).unwrap();
/// assert!(listing.contains("point (1, 2) red"));
/// ```
#[derive(Debug)]
pub struct ListingRenderer<W> {
    out: W,
}

impl<W: Write> ListingRenderer<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ListingRenderer<W> {
    fn render(&mut self, script: &Script) -> io::Result<()> {
        let out = &mut self.out;
        let (xmin, xmax) = script.xrange();
        let (ymin, ymax) = script.yrange();

        writeln!(out, "xrange {xmin} {xmax} every {}", script.xinterval())?;
        writeln!(out, "yrange {ymin} {ymax} every {}", script.yinterval())?;

        for point in script.points() {
            writeln!(out, "point {} {}", point.at, color_name(point.color.as_ref()))?;
        }
        for line in script.lines() {
            writeln!(out,
                     "line {} {} {}",
                     line.from,
                     line.to,
                     color_name(line.color.as_ref()))?;
        }
        for circle in script.circles() {
            writeln!(out, "circle {} {}", circle.radius, color_name(circle.color.as_ref()))?;
        }
        for label in script.text() {
            writeln!(out, "text {} {:?} {}", label.at, label.text, label.color)?;
        }
        out.flush()
    }
}

fn color_name(color: Option<&Color>) -> &str {
    color.map_or("default", Color::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_follows_declaration_order() {
        let script = Script::parse("xrange -2, 2
yinterval 0.5
circle 1!red
point [0,0]!blue
line [0,0], [1,1]
text [0,1], \"a\\nb\"
point 2i")
            .unwrap();

        let mut renderer = ListingRenderer::new(Vec::new());
        renderer.render(&script).unwrap();
        let listing = String::from_utf8(renderer.into_inner()).unwrap();

        assert_eq!(listing,
                   "xrange -2 2 every 0.2
yrange -1 1 every 0.5
point (0, 0) blue
point (0, 2) default
line (0, 0) (1, 1) default
circle 1 red
text (0, 1) \"a\\nb\" black
");
    }
}
