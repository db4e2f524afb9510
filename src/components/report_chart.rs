use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::models::MonthlyReport;
use crate::services::Logger;

/// Slice colors, reused in order when a report has more categories than the
/// palette has entries.
pub const SLICE_PALETTE: [RGBColor; 5] = [
    RGBColor(255, 99, 132),
    RGBColor(54, 162, 235),
    RGBColor(255, 206, 86),
    RGBColor(75, 192, 192),
    RGBColor(153, 102, 255),
];

pub fn slice_color(index: usize) -> RGBColor {
    SLICE_PALETTE[index % SLICE_PALETTE.len()]
}

const CANVAS_SIZE: u32 = 420;

#[derive(Properties, PartialEq)]
pub struct ReportChartProps {
    /// Non-empty category totals for the requested month.
    pub report: MonthlyReport,
}

pub enum Msg {}

/// Pie chart of one month's spending by category.
///
/// The component owns the canvas, and every draw wipes it before putting
/// down new slices, so at most one rendered chart exists at a time.
pub struct ReportChart {
    canvas_ref: NodeRef,
}

impl Component for ReportChart {
    type Message = Msg;
    type Properties = ReportChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().report != old_props.report {
            self.draw_chart(&ctx.props().report);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().report.is_empty() {
            self.draw_chart(&ctx.props().report);
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="report-chart-container">
                <canvas
                    ref={self.canvas_ref.clone()}
                    class="report-chart-canvas"
                    width={CANVAS_SIZE.to_string()}
                    height={CANVAS_SIZE.to_string()}
                ></canvas>
            </div>
        }
    }
}

impl ReportChart {
    fn draw_chart(&self, report: &MonthlyReport) {
        if report.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => {
                Logger::warn("report_chart", "chart canvas not mounted, skipping render");
                return;
            }
        };

        canvas.set_width(CANVAS_SIZE);
        canvas.set_height(CANVAS_SIZE);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => {
                Logger::error("report_chart", "failed to create canvas backend");
                return;
            }
        };

        let root = backend.into_drawing_area();

        // Wipe whatever the previous report drew before rendering new slices.
        if root.fill(&WHITE).is_err() {
            return;
        }

        let labels: Vec<String> = report.keys().cloned().collect();
        let sizes: Vec<f64> = report.values().copied().collect();
        let colors: Vec<RGBColor> = (0..sizes.len()).map(slice_color).collect();

        let center = (CANVAS_SIZE as i32 / 2, CANVAS_SIZE as i32 / 2);
        let radius = CANVAS_SIZE as f64 * 0.4;

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style(("sans-serif", 14).into_font().color(&BLACK));

        if root.draw(&pie).is_err() {
            Logger::error("report_chart", "failed to draw pie chart");
            return;
        }

        let _ = root.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_past_its_length() {
        assert_eq!(SLICE_PALETTE.len(), 5);
        assert_eq!(slice_color(0), slice_color(5));
        assert_eq!(slice_color(4), slice_color(9));
        assert_ne!(slice_color(0), slice_color(1));
    }

    #[test]
    fn palette_matches_the_fixed_colors() {
        assert_eq!(slice_color(0), RGBColor(255, 99, 132));
        assert_eq!(slice_color(1), RGBColor(54, 162, 235));
    }

    #[test]
    fn draw_chart_ignores_empty_reports() {
        let chart = ReportChart {
            canvas_ref: NodeRef::default(),
        };
        // Returns before touching the canvas; must not panic.
        chart.draw_chart(&MonthlyReport::new());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn draw_without_mounted_canvas_is_a_no_op() {
        let chart = ReportChart {
            canvas_ref: NodeRef::default(),
        };
        let mut report = MonthlyReport::new();
        report.insert("Food".to_string(), 120.0);
        chart.draw_chart(&report);
    }
}
