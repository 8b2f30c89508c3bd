//! Spatial-Index (KD-Tree) für Radius-Abfragen auf Welt-Positionen.

use kiddo::{KdTree, SquaredEuclidean};
use std::sync::OnceLock;

use super::viewport::{ScreenPos, Viewport, WorldPos};

/// Read-only Index über Schlüssel mit Welt-Position.
#[derive(Debug, Clone)]
pub struct SpatialIndex<K> {
    tree: KdTree<f64, 2>,
    entries: Vec<(K, WorldPos)>,
}

impl<K: Copy> SpatialIndex<K> {
    /// Baut den Index aus `(Schlüssel, Position)`-Paaren.
    pub fn from_entries(entries: impl IntoIterator<Item = (K, WorldPos)>) -> Self {
        let entries: Vec<(K, WorldPos)> = entries.into_iter().collect();
        let coords: Vec<[f64; 2]> = entries
            .iter()
            .map(|(_, pos)| [pos.x as f64, pos.y as f64])
            .collect();

        Self {
            tree: (&coords).into(),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alle Einträge im Welt-Radius um `center`, nach Distanz sortiert.
    pub fn within_radius(&self, center: WorldPos, radius: f64) -> Vec<(K, WorldPos)> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let query = center.as_dvec2();
        let mut found = self
            .tree
            .within::<SquaredEuclidean>(&[query.x, query.y], radius * radius)
            .into_iter()
            .filter_map(|hit| self.entries.get(hit.item as usize).map(|&e| (e, hit.distance)))
            .collect::<Vec<_>>();

        found.sort_by(|a, b| a.1.total_cmp(&b.1));
        found.into_iter().map(|(entry, _)| entry).collect()
    }

    /// Kandidaten, die auf dem Bildschirm höchstens `threshold_px` von `pos` liegen können.
    ///
    /// Obermenge: `world_to_screen` rundet ab, daher zwei Pixel Zuschlag.
    /// Die exakte Prüfung im Screen-Raum bleibt beim Aufrufer.
    pub fn screen_candidates(
        &self,
        viewport: &Viewport,
        pos: ScreenPos,
        threshold_px: u32,
    ) -> Vec<(K, WorldPos)> {
        let radius = (f64::from(threshold_px) + 2.0) * viewport.zoom_factor() as f64;
        self.within_radius(pixel_center(viewport, pos), radius)
    }
}

/// Welt-Position der Pixelmitte.
fn pixel_center(viewport: &Viewport, pos: ScreenPos) -> WorldPos {
    viewport.screen_to_world(pos) + WorldPos::splat(viewport.zoom_factor() / 2)
}

/// Lazy gebauter Index, der beim Klonen der Karte verworfen wird.
///
/// Snapshots werden nach dem Klonen mutiert; ein mitkopierter Index
/// wäre danach veraltet.
#[derive(Debug)]
pub struct SpatialCache<K>(OnceLock<SpatialIndex<K>>);

impl<K> SpatialCache<K> {
    /// Liefert den Index und baut ihn beim ersten Zugriff.
    pub fn get_or_build(&self, build: impl FnOnce() -> SpatialIndex<K>) -> &SpatialIndex<K> {
        self.0.get_or_init(build)
    }

    /// Verwirft einen gebauten Index nach einer Mutation.
    pub fn invalidate(&mut self) {
        self.0 = OnceLock::new();
    }
}

impl<K> Default for SpatialCache<K> {
    fn default() -> Self {
        Self(OnceLock::new())
    }
}

impl<K> Clone for SpatialCache<K> {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl<K> PartialEq for SpatialCache<K> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<K> Eq for SpatialCache<K> {}
