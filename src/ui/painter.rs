//! Renderer auf Basis des egui-Painters.

use crate::core::{MarkerKind, RenderPrimitives, Rgb, ScreenPos};
use crate::shared::{EditorOptions, Renderer};

/// Zeichenfläche: Painter plus Bildschirm-Ursprung des Canvas.
pub struct CanvasSurface<'a> {
    pub painter: &'a egui::Painter,
    pub origin: egui::Pos2,
}

impl CanvasSurface<'_> {
    fn at(&self, pos: ScreenPos) -> egui::Pos2 {
        self.origin + egui::vec2(pos.x as f32, pos.y as f32)
    }
}

/// Zeichnet Linienzüge, Marker und Beschriftungen.
#[derive(Debug, Clone)]
pub struct EguiRenderer {
    marker_size: f32,
    label_font_size: f32,
    background: egui::Color32,
}

const DASH_LENGTH: f32 = 6.0;
const GAP_LENGTH: f32 = 4.0;

fn color32(c: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

impl EguiRenderer {
    pub fn new(options: &EditorOptions) -> Self {
        let [r, g, b] = options.background_color;
        Self {
            marker_size: options.marker_size_px,
            label_font_size: options.label_font_size,
            background: egui::Color32::from_rgb(r, g, b),
        }
    }
}

impl<'a> Renderer<CanvasSurface<'a>> for EguiRenderer {
    fn draw(
        &mut self,
        surface: &mut CanvasSurface<'a>,
        width_px: u32,
        height_px: u32,
        primitives: &RenderPrimitives,
    ) {
        let painter = surface.painter;
        let canvas = egui::Rect::from_min_size(
            surface.origin,
            egui::vec2(width_px as f32, height_px as f32),
        );
        painter.rect_filled(canvas, 0.0, self.background);

        for batch in &primitives.lines {
            let stroke = egui::Stroke::new(batch.width, color32(batch.color));
            for &(a, b) in &batch.segments {
                let points = [surface.at(a), surface.at(b)];
                if batch.dashed {
                    painter.extend(egui::Shape::dashed_line(
                        &points,
                        stroke,
                        DASH_LENGTH,
                        GAP_LENGTH,
                    ));
                } else {
                    painter.line_segment(points, stroke);
                }
            }
        }

        let half = self.marker_size / 2.0;
        for marker in &primitives.markers {
            let rect = egui::Rect::from_center_size(
                surface.at(marker.pos),
                egui::vec2(self.marker_size, self.marker_size),
            );
            match marker.kind {
                MarkerKind::RailwayPoint => {
                    painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
                    painter.rect_stroke(
                        rect,
                        0.0,
                        egui::Stroke::new(1.0, egui::Color32::BLACK),
                        egui::StrokeKind::Inside,
                    );
                }
                MarkerKind::BorderPoint => {
                    painter.rect_filled(rect, 0.0, egui::Color32::BLACK);
                }
                MarkerKind::Pointer => {
                    painter.rect_filled(rect.expand(half / 2.0), 0.0, egui::Color32::RED);
                }
            }
        }

        for label in &primitives.labels {
            let size = self.label_font_size + f32::from(label.level) * 2.0;
            painter.text(
                surface.at(label.pos),
                egui::Align2::LEFT_BOTTOM,
                &label.text,
                egui::FontId::proportional(size),
                egui::Color32::BLACK,
            );
        }
    }
}
