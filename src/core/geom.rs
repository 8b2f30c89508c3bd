//! Ganzzahlige Geometrie-Hilfen für Hit-Tests und Viewport-Culling.

use super::viewport::{ScreenPos, WorldPos};

/// Quadrierter Abstand zweier Screen-Punkte.
pub fn distance_sq(a: ScreenPos, b: ScreenPos) -> i64 {
    let dx = i64::from(a.x) - i64::from(b.x);
    let dy = i64::from(a.y) - i64::from(b.y);
    dx * dx + dy * dy
}

/// Quadrierter Abstand von `p` zur Strecke `a`–`b` (Screen-Raum).
pub fn distance_sq_to_segment(a: ScreenPos, b: ScreenPos, p: ScreenPos) -> f64 {
    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    let (bx, by) = (f64::from(b.x), f64::from(b.y));
    let (px, py) = (f64::from(p.x), f64::from(p.y));

    let (dx, dy) = (bx - ax, by - ay);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return (px - ax).powi(2) + (py - ay).powi(2);
    }

    let t = (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0);
    let (cx, cy) = (ax + t * dx, ay + t * dy);
    (px - cx).powi(2) + (py - cy).powi(2)
}

/// Euklidische Länge einer Strecke in Welt-Einheiten.
pub fn world_distance(a: WorldPos, b: WorldPos) -> f64 {
    let d = b - a;
    (d.x as f64).hypot(d.y as f64)
}

/// Achsenparalleles Rechteck in Welt-Koordinaten (offene Grenzen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldRect {
    pub min: WorldPos,
    pub max: WorldPos,
}

impl WorldRect {
    /// Erstellt ein Rechteck aus zwei beliebigen Ecken.
    pub fn from_corners(a: WorldPos, b: WorldPos) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Liegt der Punkt strikt innerhalb?
    pub fn contains(&self, p: WorldPos) -> bool {
        self.min.x < p.x && p.x < self.max.x && self.min.y < p.y && p.y < self.max.y
    }

    /// Schneidet oder berührt die Strecke `a`–`b` das Rechteck?
    pub fn crosses_segment(&self, a: WorldPos, b: WorldPos) -> bool {
        if self.contains(a) || self.contains(b) {
            return true;
        }

        crosses_vertical(a.x, a.y, b.x, b.y, self.min.x, self.min.y, self.max.y)
            || crosses_vertical(a.x, a.y, b.x, b.y, self.max.x, self.min.y, self.max.y)
            || crosses_vertical(a.y, a.x, b.y, b.x, self.min.y, self.min.x, self.max.x)
            || crosses_vertical(a.y, a.x, b.y, b.x, self.max.y, self.min.x, self.max.x)
    }
}

/// Kreuzt die Strecke (ax,ay)–(bx,by) die senkrechte Linie `x` zwischen `ylo` und `yhi`?
///
/// Rechnet in `i128`, damit Produkte großer Welt-Koordinaten nicht überlaufen.
fn crosses_vertical(ax: i64, ay: i64, bx: i64, by: i64, x: i64, ylo: i64, yhi: i64) -> bool {
    if ax == bx {
        return false;
    }
    let (lo_x, hi_x) = (ax.min(bx), ax.max(bx));
    if x < lo_x || x > hi_x {
        return false;
    }

    // y(x) = ay + (x - ax) * (by - ay) / (bx - ax), skaliert mit (bx - ax)
    let span = i128::from(bx) - i128::from(ax);
    let scaled_y = i128::from(ay) * span + (i128::from(x) - i128::from(ax)) * (i128::from(by) - i128::from(ay));
    let (lo, hi) = (i128::from(ylo) * span, i128::from(yhi) * span);

    if span > 0 {
        lo < scaled_y && scaled_y < hi
    } else {
        lo > scaled_y && scaled_y > hi
    }
}
