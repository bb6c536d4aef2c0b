use badgesmith_markup::number;

/// Which vertical edges of a segment get rounded corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rounding {
    pub left: bool,
    pub right: bool,
}

impl Rounding {
    pub const ALL: Rounding = Rounding {
        left: true,
        right: true,
    };
    /// Flat right edge, for a segment that is followed by another.
    pub const LEFT: Rounding = Rounding {
        left: true,
        right: false,
    };
    /// Flat left edge, for a segment that follows another.
    pub const RIGHT: Rounding = Rounding {
        left: false,
        right: true,
    };
}

/// Builder for absolute `M`/`H`/`V`/`A`/`Z` path data.
#[derive(Debug, Clone, Default)]
pub struct PathData {
    commands: Vec<String>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.commands
            .push(format!("M {},{}", number(x), number(y)));
        self
    }

    pub fn horizontal(mut self, x: f64) -> Self {
        self.commands.push(format!("H {}", number(x)));
        self
    }

    pub fn vertical(mut self, y: f64) -> Self {
        self.commands.push(format!("V {}", number(y)));
        self
    }

    /// Clockwise quarter-circle arc of radius `r` ending at `(x, y)`.
    pub fn quarter_arc(mut self, r: f64, x: f64, y: f64) -> Self {
        let r = number(r);
        self.commands
            .push(format!("A {r},{r} 0 0,1 {},{}", number(x), number(y)));
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push("Z".to_string());
        self
    }

    pub fn build(self) -> String {
        self.commands.join(" ")
    }
}

/// Outline of a `width` x `height` rectangle at the origin, drawn clockwise
/// from the top-left, with quarter-circle corners of radius `r` on the
/// rounded edges.
pub fn rounded_rect_path(width: f64, height: f64, r: f64, rounding: Rounding) -> String {
    let mut path = PathData::new();

    path = if rounding.left {
        path.move_to(0.0, r).quarter_arc(r, r, 0.0)
    } else {
        path.move_to(0.0, 0.0)
    };

    path = if rounding.right {
        path.horizontal(width - r)
            .quarter_arc(r, width, r)
            .vertical(height - r)
            .quarter_arc(r, width - r, height)
    } else {
        path.horizontal(width).vertical(height)
    };

    path = if rounding.left {
        path.horizontal(r).quarter_arc(r, 0.0, height - r)
    } else {
        path.horizontal(0.0)
    };

    path.close().build()
}
