//! In-Memory-Karte mit Strecken, Stationen und Grenz-Graph.
//!
//! Implementiert [`MapEngine`] im Snapshot-Stil: jede Mutation klont die
//! Karte, validiert alle Referenzen und liefert einen neuen `Arc`.

use super::geom::{self, WorldRect};
use super::map_engine::{
    BorderFeature, BorderPointId, BorderStyle, EngineError, EngineResult, Label, LineBatch,
    MapEngine, MapSnapshot, Marker, MarkerKind, NearestSegment, OverlayHint, PointTarget,
    RailwayId, RailwayInfo, RailwayList, Reference, RenderOptions, RenderPrimitives, Rgb,
    StationId, StationInfo, StationList,
};
use super::spatial::{SpatialCache, SpatialIndex};
use super::viewport::{ScreenPos, Viewport, WorldPos};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Halbe Länge des Stationsstrichs quer zur Strecke (Pixel).
const STATION_TICK_HALF_PX: f32 = 6.0;
/// Linienbreite der Stationsstriche (Pixel).
const STATION_TICK_WIDTH: f32 = 4.0;

/// Farben für neu gezeichnete Strecken, zyklisch vergeben.
const NEW_RAILWAY_PALETTE: [Rgb; 6] = [
    Rgb::new(200, 30, 30),
    Rgb::new(30, 90, 200),
    Rgb::new(20, 140, 60),
    Rgb::new(220, 130, 0),
    Rgb::new(130, 40, 160),
    Rgb::new(0, 140, 150),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct RailwayPoint {
    pos: WorldPos,
    #[serde(default)]
    station: Option<StationId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Railway {
    info: RailwayInfo,
    points: Vec<RailwayPoint>,
}

/// Knoten des Grenz-Graphen; Kanten sind symmetrisch in beiden Knoten gespeichert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct BorderPoint {
    pos: WorldPos,
    #[serde(default)]
    links: IndexMap<BorderPointId, BorderStyle>,
}

/// Streckenpunkt mit Station, als Eintrag im Stations-Index.
type StationPoint = (StationId, RailwayId, usize);

/// Vollständige Eisenbahnkarte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailwayMap {
    railways: IndexMap<RailwayId, Railway>,
    stations: IndexMap<StationId, StationInfo>,
    border_points: IndexMap<BorderPointId, BorderPoint>,
    next_railway_id: u64,
    next_station_id: u64,
    next_border_point_id: u64,
    #[serde(skip)]
    border_index: SpatialCache<BorderPointId>,
    #[serde(skip)]
    station_index: SpatialCache<StationPoint>,
}

impl RailwayMap {
    /// Erstellt eine leere Karte.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt eine Karte aus den Bytes von [`MapEngine::save`].
    pub fn load(bytes: &[u8]) -> EngineResult<Self> {
        let map: RailwayMap = serde_json::from_slice(bytes)
            .map_err(|e| EngineError::Persistence(e.to_string()))?;
        map.validate()?;
        log::info!(
            "Karte geladen: {} Strecken, {} Stationen, {} Grenzpunkte",
            map.railways.len(),
            map.stations.len(),
            map.border_points.len()
        );
        Ok(map)
    }

    /// Verpackt die Karte als teilbaren Snapshot.
    pub fn into_snapshot(self) -> MapSnapshot {
        Arc::new(self)
    }

    /// Fügt eine Strecke mit den gegebenen Punkten hinzu.
    pub fn add_railway(
        &mut self,
        info: RailwayInfo,
        points: impl IntoIterator<Item = WorldPos>,
    ) -> RailwayId {
        let id = RailwayId(self.next_railway_id);
        self.next_railway_id += 1;
        let points = points
            .into_iter()
            .map(|pos| RailwayPoint { pos, station: None })
            .collect();
        self.railways.insert(id, Railway { info, points });
        self.station_index.invalidate();
        id
    }

    /// Legt eine neue Station am Punkt an (ersetzt eine vorhandene Zuordnung).
    pub fn add_station(
        &mut self,
        railway: RailwayId,
        index: usize,
        info: StationInfo,
    ) -> EngineResult<StationId> {
        self.point_mut(railway, index)?;
        let id = StationId(self.next_station_id);
        self.next_station_id += 1;
        self.stations.insert(id, info);
        self.point_mut(railway, index)?.station = Some(id);
        self.prune_orphaned_stations();
        self.station_index.invalidate();
        Ok(id)
    }

    /// Fügt einen unverbundenen Grenzpunkt hinzu.
    pub fn add_border_point(&mut self, pos: WorldPos) -> BorderPointId {
        let id = BorderPointId(self.next_border_point_id);
        self.next_border_point_id += 1;
        self.border_points.insert(
            id,
            BorderPoint {
                pos,
                links: IndexMap::new(),
            },
        );
        self.border_index.invalidate();
        id
    }

    /// Verbindet zwei Grenzpunkte (überschreibt den Stil einer vorhandenen Kante).
    pub fn link_border_points(
        &mut self,
        a: BorderPointId,
        b: BorderPointId,
        style: BorderStyle,
    ) -> EngineResult<()> {
        if a == b || !self.border_points.contains_key(&a) || !self.border_points.contains_key(&b)
        {
            return Err(EngineError::InvalidReference(Reference::BorderEdge(a, b)));
        }
        self.border_point_mut(a)?.links.insert(b, style);
        self.border_point_mut(b)?.links.insert(a, style);
        Ok(())
    }

    pub fn railway_count(&self) -> usize {
        self.railways.len()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn border_point_count(&self) -> usize {
        self.border_points.len()
    }

    /// Punkt-Positionen einer Strecke.
    pub fn railway_points(&self, railway: RailwayId) -> Option<Vec<WorldPos>> {
        self.railways
            .get(&railway)
            .map(|r| r.points.iter().map(|p| p.pos).collect())
    }

    /// Station am Punkt, falls vorhanden.
    pub fn station_id_at(&self, railway: RailwayId, index: usize) -> Option<StationId> {
        self.railways
            .get(&railway)?
            .points
            .get(index)?
            .station
    }

    pub fn border_point_position(&self, id: BorderPointId) -> Option<WorldPos> {
        self.border_points.get(&id).map(|bp| bp.pos)
    }

    /// Stil der Kante `a`–`b`, falls verbunden.
    pub fn border_link(&self, a: BorderPointId, b: BorderPointId) -> Option<BorderStyle> {
        self.border_points.get(&a)?.links.get(&b).copied()
    }

    // ── interne Helfer ──────────────────────────────────────────

    fn border_index(&self) -> &SpatialIndex<BorderPointId> {
        self.border_index.get_or_build(|| {
            SpatialIndex::from_entries(self.border_points.iter().map(|(&id, bp)| (id, bp.pos)))
        })
    }

    fn station_index(&self) -> &SpatialIndex<StationPoint> {
        self.station_index.get_or_build(|| {
            SpatialIndex::from_entries(self.railways.iter().flat_map(|(&id, r)| {
                r.points
                    .iter()
                    .enumerate()
                    .filter_map(move |(i, p)| Some(((p.station?, id, i), p.pos)))
            }))
        })
    }

    fn edit(
        &self,
        apply: impl FnOnce(&mut RailwayMap) -> EngineResult<()>,
    ) -> EngineResult<MapSnapshot> {
        let mut next = self.clone();
        apply(&mut next)?;
        Ok(next.into_snapshot())
    }

    fn railway(&self, id: RailwayId) -> EngineResult<&Railway> {
        self.railways
            .get(&id)
            .ok_or(EngineError::InvalidReference(Reference::Railway(id)))
    }

    fn railway_mut(&mut self, id: RailwayId) -> EngineResult<&mut Railway> {
        self.railways
            .get_mut(&id)
            .ok_or(EngineError::InvalidReference(Reference::Railway(id)))
    }

    fn point_mut(&mut self, railway: RailwayId, index: usize) -> EngineResult<&mut RailwayPoint> {
        self.railway_mut(railway)?
            .points
            .get_mut(index)
            .ok_or(EngineError::InvalidReference(Reference::Point { railway, index }))
    }

    fn border_point_mut(&mut self, id: BorderPointId) -> EngineResult<&mut BorderPoint> {
        self.border_points
            .get_mut(&id)
            .ok_or(EngineError::InvalidReference(Reference::BorderPoint(id)))
    }

    fn require_border_edge(
        &self,
        a: BorderPointId,
        b: BorderPointId,
    ) -> EngineResult<BorderStyle> {
        self.border_link(a, b)
            .ok_or(EngineError::InvalidReference(Reference::BorderEdge(a, b)))
    }

    fn unlink_border_points(&mut self, a: BorderPointId, b: BorderPointId) {
        if let Some(bp) = self.border_points.get_mut(&a) {
            bp.links.shift_remove(&b);
        }
        if let Some(bp) = self.border_points.get_mut(&b) {
            bp.links.shift_remove(&a);
        }
    }

    /// Entfernt Stationen, auf die kein Punkt mehr verweist.
    fn prune_orphaned_stations(&mut self) {
        let referenced: IndexSet<StationId> = self
            .railways
            .values()
            .flat_map(|r| r.points.iter().filter_map(|p| p.station))
            .collect();
        self.stations.retain(|id, _| referenced.contains(id));
    }

    /// Jede Grenzkante genau einmal (`a < b`).
    fn border_edges(
        &self,
    ) -> impl Iterator<Item = (BorderPointId, BorderPointId, BorderStyle)> + '_ {
        self.border_points.iter().flat_map(|(&a, bp)| {
            bp.links
                .iter()
                .filter(move |(b, _)| a < **b)
                .map(move |(&b, &style)| (a, b, style))
        })
    }

    /// Prüft Referenzen nach dem Laden.
    fn validate(&self) -> EngineResult<()> {
        for (&id, railway) in &self.railways {
            for (index, point) in railway.points.iter().enumerate() {
                if let Some(station) = point.station {
                    if !self.stations.contains_key(&station) {
                        return Err(EngineError::InvalidReference(Reference::Station {
                            railway: id,
                            index,
                        }));
                    }
                }
            }
        }
        for (&a, bp) in &self.border_points {
            for &b in bp.links.keys() {
                if self.border_link(b, a).is_none() {
                    return Err(EngineError::InvalidReference(Reference::BorderEdge(a, b)));
                }
            }
        }
        Ok(())
    }

    fn render_railways(
        &self,
        viewport: &Viewport,
        rect: &WorldRect,
        options: &RenderOptions,
        out: &mut RenderPrimitives,
    ) {
        for (&id, railway) in &self.railways {
            let selected = options.selected_railway == Some(id);
            let preview = match options.overlay {
                Some(OverlayHint::MovedPoint {
                    railway: hint_railway,
                    target,
                    pointer,
                }) if selected && hint_railway == id => Some((target, pointer)),
                _ => None,
            };

            let mut segments = Vec::new();

            if let Some((target, pointer)) = preview {
                out.markers.push(Marker {
                    pos: pointer,
                    kind: MarkerKind::Pointer,
                });
                for neighbor in preview_neighbors(target, railway.points.len()) {
                    let neighbor_pos = viewport.world_to_screen(railway.points[neighbor].pos);
                    segments.push((pointer, neighbor_pos));
                }
            }

            for (i, pair) in railway.points.windows(2).enumerate() {
                if preview.is_some_and(|(target, _)| preview_replaces_segment(target, i)) {
                    continue;
                }
                if rect.crosses_segment(pair[0].pos, pair[1].pos) {
                    segments.push((
                        viewport.world_to_screen(pair[0].pos),
                        viewport.world_to_screen(pair[1].pos),
                    ));
                }
            }

            if selected {
                for (i, point) in railway.points.iter().enumerate() {
                    if matches!(preview, Some((PointTarget::Existing(moved), _)) if moved == i) {
                        continue;
                    }
                    if rect.contains(point.pos) {
                        out.markers.push(Marker {
                            pos: viewport.world_to_screen(point.pos),
                            kind: MarkerKind::RailwayPoint,
                        });
                    }
                }
            }

            if !segments.is_empty() {
                let emphasis = if selected { 1.0 } else { 0.0 };
                out.lines.push(LineBatch {
                    color: railway.info.color,
                    width: 1.0 + f32::from(railway.info.level) * 0.5 + emphasis,
                    dashed: false,
                    segments,
                });
            }
        }
    }

    fn render_stations(&self, viewport: &Viewport, rect: &WorldRect, out: &mut RenderPrimitives) {
        let mut ticks = Vec::new();
        let mut labelled = IndexSet::new();

        for railway in self.railways.values() {
            let points = &railway.points;
            for (i, point) in points.iter().enumerate() {
                let Some(station) = point.station else {
                    continue;
                };
                if !rect.contains(point.pos) {
                    continue;
                }

                let prev = if i > 0 { points[i - 1].pos } else { point.pos };
                let next = points.get(i + 1).map_or(point.pos, |p| p.pos);
                ticks.push(station_tick(
                    viewport.world_to_screen(prev),
                    viewport.world_to_screen(point.pos),
                    viewport.world_to_screen(next),
                ));

                if labelled.insert(station) {
                    if let Some(info) = self.stations.get(&station) {
                        out.labels.push(Label {
                            pos: viewport.world_to_screen(point.pos),
                            text: info.name.clone(),
                            level: info.level,
                        });
                    }
                }
            }
        }

        if !ticks.is_empty() {
            out.lines.push(LineBatch {
                color: Rgb::STATION_GRAY,
                width: STATION_TICK_WIDTH,
                dashed: false,
                segments: ticks,
            });
        }
    }

    fn render_borders(
        &self,
        viewport: &Viewport,
        rect: &WorldRect,
        options: &RenderOptions,
        out: &mut RenderPrimitives,
    ) {
        let mut by_style: IndexMap<BorderStyle, Vec<(ScreenPos, ScreenPos)>> =
            BorderStyle::ALL.iter().map(|&s| (s, Vec::new())).collect();

        let (moved_point, moved_edge, pointer) = match options.overlay {
            Some(OverlayHint::MovedBorderFeature { feature, pointer }) => match feature {
                BorderFeature::Point(id) => (Some(id), None, Some(pointer)),
                BorderFeature::Edge(a, b) => (None, Some((a, b)), Some(pointer)),
            },
            Some(OverlayHint::NewBorderEdge { pointer, .. }) => (None, None, Some(pointer)),
            _ => (None, None, None),
        };

        for (a, b, style) in self.border_edges() {
            let (Some(pa), Some(pb)) =
                (self.border_point_position(a), self.border_point_position(b))
            else {
                continue;
            };
            let segments = by_style.entry(style).or_default();

            if let (Some((ea, eb)), Some(pointer)) = (moved_edge, pointer) {
                if (ea, eb) == (a, b) || (ea, eb) == (b, a) {
                    segments.push((viewport.world_to_screen(pa), pointer));
                    segments.push((pointer, viewport.world_to_screen(pb)));
                    continue;
                }
            }
            if let (Some(moved), Some(pointer)) = (moved_point, pointer) {
                if moved == a {
                    segments.push((pointer, viewport.world_to_screen(pb)));
                    continue;
                }
                if moved == b {
                    segments.push((viewport.world_to_screen(pa), pointer));
                    continue;
                }
            }
            if rect.crosses_segment(pa, pb) {
                segments.push((viewport.world_to_screen(pa), viewport.world_to_screen(pb)));
            }
        }

        if let Some(OverlayHint::NewBorderEdge {
            anchor,
            style,
            pointer,
        }) = options.overlay
        {
            if let Some(pos) = self.border_point_position(anchor) {
                by_style
                    .entry(style)
                    .or_default()
                    .push((viewport.world_to_screen(pos), pointer));
            }
        }

        if let Some(pointer) = pointer {
            out.markers.push(Marker {
                pos: pointer,
                kind: MarkerKind::Pointer,
            });
        }

        if options.show_border_markers {
            for (&id, bp) in &self.border_points {
                if Some(id) == moved_point || !rect.contains(bp.pos) {
                    continue;
                }
                out.markers.push(Marker {
                    pos: viewport.world_to_screen(bp.pos),
                    kind: MarkerKind::BorderPoint,
                });
            }
        }

        for (style, segments) in by_style {
            if segments.is_empty() {
                continue;
            }
            out.lines.push(LineBatch {
                color: Rgb::BLACK,
                width: if style == BorderStyle::Bold { 3.0 } else { 1.0 },
                dashed: style == BorderStyle::Dotted,
                segments,
            });
        }
    }
}

/// Nachbarn, die während eines Punkt-Drags mit dem Zeiger verbunden werden.
fn preview_neighbors(target: PointTarget, len: usize) -> Vec<usize> {
    match target {
        PointTarget::InsertBefore(i) if i >= 1 && i < len => vec![i - 1, i],
        PointTarget::InsertBefore(_) => Vec::new(),
        PointTarget::Existing(i) => {
            let mut neighbors = Vec::with_capacity(2);
            if i > 0 && i - 1 < len {
                neighbors.push(i - 1);
            }
            if i + 1 < len {
                neighbors.push(i + 1);
            }
            neighbors
        }
    }
}

/// Wird das Segment `i`–`i+1` durch die Drag-Vorschau ersetzt?
fn preview_replaces_segment(target: PointTarget, i: usize) -> bool {
    match target {
        PointTarget::InsertBefore(j) => i + 1 == j,
        PointTarget::Existing(j) => i == j || i + 1 == j,
    }
}

/// Strich quer zur Strecke durch den Stationspunkt.
fn station_tick(prev: ScreenPos, at: ScreenPos, next: ScreenPos) -> (ScreenPos, ScreenPos) {
    let dir = (next - prev).as_vec2();
    let normal = if dir.length_squared() > 0.0 {
        dir.perp().normalize() * STATION_TICK_HALF_PX
    } else {
        glam::Vec2::new(0.0, STATION_TICK_HALF_PX)
    };
    let offset = normal.round().as_ivec2();
    (at - offset, at + offset)
}

impl MapEngine for RailwayMap {
    fn render(&self, viewport: &Viewport, options: &RenderOptions) -> RenderPrimitives {
        let rect = WorldRect::from_corners(viewport.top_left, viewport.bottom_right());
        let mut out = RenderPrimitives::default();
        self.render_railways(viewport, &rect, options, &mut out);
        self.render_stations(viewport, &rect, &mut out);
        self.render_borders(viewport, &rect, options, &mut out);
        out
    }

    fn railways_in_viewport(&self, viewport: &Viewport) -> RailwayList {
        let rect = WorldRect::from_corners(viewport.top_left, viewport.bottom_right());
        let mut list = RailwayList::default();

        for (&id, railway) in &self.railways {
            let visible = railway
                .points
                .windows(2)
                .any(|pair| rect.crosses_segment(pair[0].pos, pair[1].pos))
                || railway.points.iter().any(|p| rect.contains(p.pos));
            if visible {
                list.ids.push(id);
                list.names.push(railway.info.name.clone());
            }
        }
        list
    }

    fn find_nearest_segment(
        &self,
        viewport: &Viewport,
        railway: RailwayId,
        pos: ScreenPos,
        threshold_px: u32,
    ) -> Option<NearestSegment> {
        let railway = self.railways.get(&railway)?;
        let threshold_sq = i64::from(threshold_px).pow(2);
        let screen: Vec<ScreenPos> = railway
            .points
            .iter()
            .map(|p| viewport.world_to_screen(p.pos))
            .collect();

        let nearest_point = screen
            .iter()
            .enumerate()
            .map(|(i, &p)| (i, geom::distance_sq(p, pos)))
            .min_by_key(|&(_, d)| d);
        if let Some((index, d)) = nearest_point {
            if d <= threshold_sq {
                return Some(NearestSegment {
                    point_index: index,
                    is_insertion_point: false,
                });
            }
        }

        screen
            .windows(2)
            .enumerate()
            .map(|(i, pair)| (i + 1, geom::distance_sq_to_segment(pair[0], pair[1], pos)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .filter(|&(_, d)| d <= threshold_sq as f64)
            .map(|(index, _)| NearestSegment {
                point_index: index,
                is_insertion_point: true,
            })
    }

    fn find_nearest_border_feature(
        &self,
        viewport: &Viewport,
        pos: ScreenPos,
        threshold_px: u32,
    ) -> Option<BorderFeature> {
        let threshold_sq = i64::from(threshold_px).pow(2);

        let nearest_point = self
            .border_index()
            .screen_candidates(viewport, pos, threshold_px)
            .into_iter()
            .map(|(id, at)| (id, geom::distance_sq(viewport.world_to_screen(at), pos)))
            .min_by_key(|&(_, d)| d);
        if let Some((id, d)) = nearest_point {
            if d <= threshold_sq {
                return Some(BorderFeature::Point(id));
            }
        }

        self.border_edges()
            .filter_map(|(a, b, _)| {
                let pa = viewport.world_to_screen(self.border_point_position(a)?);
                let pb = viewport.world_to_screen(self.border_point_position(b)?);
                Some((a, b, geom::distance_sq_to_segment(pa, pb, pos)))
            })
            .min_by(|x, y| x.2.total_cmp(&y.2))
            .filter(|&(_, _, d)| d <= threshold_sq as f64)
            .map(|(a, b, _)| BorderFeature::Edge(a, b))
    }

    fn station_info(&self, railway: RailwayId, point_index: usize) -> Option<StationInfo> {
        let station = self.station_id_at(railway, point_index)?;
        self.stations.get(&station).cloned()
    }

    fn railway_info(&self, railway: RailwayId) -> EngineResult<RailwayInfo> {
        Ok(self.railway(railway)?.info.clone())
    }

    fn number_of_points(&self, railway: RailwayId) -> EngineResult<usize> {
        Ok(self.railway(railway)?.points.len())
    }

    fn station_list_on_railway(&self, railway: RailwayId) -> EngineResult<StationList> {
        let railway = self.railway(railway)?;
        let mut list = StationList::default();
        let mut distance = 0.0;

        for (i, point) in railway.points.iter().enumerate() {
            if i > 0 {
                distance += geom::world_distance(railway.points[i - 1].pos, point.pos);
            }
            let Some(info) = point.station.and_then(|s| self.stations.get(&s)) else {
                continue;
            };
            list.names.push(info.name.clone());
            list.cumulative_distances.push(distance);
        }
        Ok(list)
    }

    fn save(&self) -> EngineResult<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| EngineError::Persistence(e.to_string()))
    }

    fn insert_point(
        &self,
        railway: RailwayId,
        before: usize,
        pos: WorldPos,
    ) -> EngineResult<MapSnapshot> {
        self.edit(|map| {
            let points = &mut map.railway_mut(railway)?.points;
            if before > points.len() {
                return Err(EngineError::InvalidReference(Reference::Point {
                    railway,
                    index: before,
                }));
            }
            points.insert(before, RailwayPoint { pos, station: None });
            Ok(())
        })
    }

    fn move_point(
        &self,
        railway: RailwayId,
        index: usize,
        pos: WorldPos,
    ) -> EngineResult<MapSnapshot> {
        self.edit(|map| {
            map.point_mut(railway, index)?.pos = pos;
            Ok(())
        })
    }

    fn remove_point(&self, railway: RailwayId, index: usize) -> EngineResult<MapSnapshot> {
        self.edit(|map| {
            map.point_mut(railway, index)?;
            map.railway_mut(railway)?.points.remove(index);
            map.prune_orphaned_stations();
            Ok(())
        })
    }

    fn set_station_info(
        &self,
        railway: RailwayId,
        index: usize,
        info: &StationInfo,
    ) -> EngineResult<MapSnapshot> {
        self.edit(|map| {
            let existing = map.point_mut(railway, index)?.station;
            match existing {
                Some(station) => {
                    map.stations.insert(station, info.clone());
                }
                None => {
                    map.add_station(railway, index, info.clone())?;
                }
            }
            Ok(())
        })
    }

    fn detach_station(&self, railway: RailwayId, index: usize) -> EngineResult<MapSnapshot> {
        self.edit(|map| {
            let point = map.point_mut(railway, index)?;
            if point.station.take().is_none() {
                return Err(EngineError::InvalidReference(Reference::Station { railway, index }));
            }
            map.prune_orphaned_stations();
            Ok(())
        })
    }

    fn link_existing_point_to_station(
        &self,
        viewport: &Viewport,
        railway: RailwayId,
        index: usize,
        pos: ScreenPos,
        threshold_px: u32,
    ) -> EngineResult<MapSnapshot> {
        let threshold_sq = i64::from(threshold_px).pow(2);
        let station = self
            .station_index()
            .screen_candidates(viewport, pos, threshold_px)
            .into_iter()
            .filter(|&((_, id, i), _)| !(id == railway && i == index))
            .map(|((station, _, _), at)| {
                (station, geom::distance_sq(viewport.world_to_screen(at), pos))
            })
            .filter(|&(_, d)| d <= threshold_sq)
            .min_by_key(|&(_, d)| d)
            .map(|(station, _)| station);

        self.edit(|map| {
            let point = map.point_mut(railway, index)?;
            point.station = Some(station.ok_or(EngineError::NoStationNearby)?);
            map.prune_orphaned_stations();
            Ok(())
        })
    }

    fn set_railway_info(
        &self,
        railway: RailwayId,
        info: &RailwayInfo,
    ) -> EngineResult<MapSnapshot> {
        self.edit(|map| {
            map.railway_mut(railway)?.info = info.clone();
            Ok(())
        })
    }

    fn create_railway(&self, pos: WorldPos) -> EngineResult<(MapSnapshot, RailwayId)> {
        let mut next = self.clone();
        let ordinal = next.next_railway_id;
        let info = RailwayInfo {
            name: format!("Strecke {}", ordinal + 1),
            color: NEW_RAILWAY_PALETTE[ordinal as usize % NEW_RAILWAY_PALETTE.len()],
            level: 0,
        };
        let id = next.add_railway(info, [pos]);
        Ok((next.into_snapshot(), id))
    }

    fn remove_railway(&self, railway: RailwayId) -> EngineResult<MapSnapshot> {
        self.edit(|map| {
            map.railways
                .shift_remove(&railway)
                .ok_or(EngineError::InvalidReference(Reference::Railway(railway)))?;
            map.prune_orphaned_stations();
            Ok(())
        })
    }

    fn move_border_point(&self, id: BorderPointId, pos: WorldPos) -> EngineResult<MapSnapshot> {
        self.edit(|map| {
            map.border_point_mut(id)?.pos = pos;
            Ok(())
        })
    }

    fn remove_border_point(&self, id: BorderPointId) -> EngineResult<MapSnapshot> {
        self.edit(|map| {
            let removed = map
                .border_points
                .shift_remove(&id)
                .ok_or(EngineError::InvalidReference(Reference::BorderPoint(id)))?;
            for neighbor in removed.links.keys() {
                if let Some(bp) = map.border_points.get_mut(neighbor) {
                    bp.links.shift_remove(&id);
                }
            }
            Ok(())
        })
    }

    fn remove_border_edge(&self, a: BorderPointId, b: BorderPointId) -> EngineResult<MapSnapshot> {
        self.edit(|map| {
            map.require_border_edge(a, b)?;
            map.unlink_border_points(a, b);
            Ok(())
        })
    }

    fn insert_border_point_on_edge(
        &self,
        a: BorderPointId,
        b: BorderPointId,
        pos: WorldPos,
    ) -> EngineResult<MapSnapshot> {
        self.edit(|map| {
            let style = map.require_border_edge(a, b)?;
            map.unlink_border_points(a, b);
            let mid = map.add_border_point(pos);
            map.link_border_points(a, mid, style)?;
            map.link_border_points(mid, b, style)
        })
    }

    fn connect_existing_border_points(
        &self,
        a: BorderPointId,
        b: BorderPointId,
        style: BorderStyle,
    ) -> EngineResult<MapSnapshot> {
        self.edit(|map| map.link_border_points(a, b, style))
    }

    fn connect_new_border_point(
        &self,
        anchor: BorderPointId,
        pos: WorldPos,
        style: BorderStyle,
    ) -> EngineResult<MapSnapshot> {
        self.edit(|map| {
            map.border_point_mut(anchor)?;
            let id = map.add_border_point(pos);
            map.link_border_points(anchor, id, style)
        })
    }
}
