use perf_chart::api::ChartConfig;
use perf_chart::core::Viewport;
use perf_chart::error::ChartError;
use perf_chart::host::{CanvasChartFactory, CanvasElement, ChartFactory, Document, StaticDocument};
use perf_chart::performance::{PERFORMANCE_CHART_ID, performance_chart_config};
use perf_chart::render::NullRenderer;

fn canvas(width: u32, height: u32) -> CanvasElement {
    CanvasElement::new(PERFORMANCE_CHART_ID, Viewport::new(width, height)).expect("canvas")
}

#[test]
fn construct_binds_canvas_and_renders_once() {
    let mut factory = CanvasChartFactory::new(NullRenderer::default());
    let chart = factory
        .construct(&canvas(800, 400), &performance_chart_config().expect("config"))
        .expect("construct");

    assert_eq!(chart.config(), &performance_chart_config().expect("config"));
    assert_eq!(factory.renderer().frames_rendered, 1);
    assert_eq!(factory.renderer().last_line_count, chart.frame().lines.len());
    assert_eq!(factory.renderer().last_text_count, chart.frame().texts.len());
}

#[test]
fn second_chart_on_same_canvas_is_refused_until_destroyed() {
    let mut factory = CanvasChartFactory::new(NullRenderer::default());
    let element = canvas(800, 400);
    let config = performance_chart_config().expect("config");

    let chart = factory.construct(&element, &config).expect("first");
    assert!(matches!(
        factory.construct(&element, &config),
        Err(ChartError::CanvasInUse { .. })
    ));

    assert!(factory.destroy(chart));
    assert!(!factory.is_bound(PERFORMANCE_CHART_ID));
    factory.construct(&element, &config).expect("canvas free again");
    assert_eq!(factory.renderer().frames_rendered, 2);
}

#[test]
fn invalid_config_leaves_canvas_free() {
    let mut factory = CanvasChartFactory::new(NullRenderer::default());
    let mut config = performance_chart_config().expect("config");
    config.data.labels.pop();

    assert!(factory.construct(&canvas(800, 400), &config).is_err());
    assert_eq!(factory.bound_count(), 0);
    assert_eq!(factory.renderer().frames_rendered, 0);
}

#[test]
fn responsive_chart_relayouts_on_resize() {
    let mut document = StaticDocument::new()
        .with_canvas(PERFORMANCE_CHART_ID, Viewport::new(800, 400))
        .expect("canvas");
    let mut factory = CanvasChartFactory::new(NullRenderer::default());
    let element = document.element_by_id(PERFORMANCE_CHART_ID).expect("element");
    let mut chart = factory
        .construct(&element, &performance_chart_config().expect("config"))
        .expect("construct");
    let narrow_bar = chart.frame().rects[0].width;

    document
        .resize_canvas(PERFORMANCE_CHART_ID, Viewport::new(1200, 400))
        .expect("resize canvas");
    let resized = document.element_by_id(PERFORMANCE_CHART_ID).expect("element");
    assert!(factory.resize(&mut chart, resized.viewport).expect("resize"));

    assert_eq!(chart.viewport(), Viewport::new(1200, 400));
    assert!(chart.frame().rects[0].width > narrow_bar);
    assert_eq!(factory.renderer().frames_rendered, 2);

    assert!(!factory.resize(&mut chart, Viewport::new(1200, 400)).expect("same size"));
    assert_eq!(factory.renderer().frames_rendered, 2);
}

#[test]
fn fixed_size_chart_ignores_resize() {
    let mut factory = CanvasChartFactory::new(NullRenderer::default());
    let config: ChartConfig = performance_chart_config().expect("config").with_responsive(false);
    let mut chart = factory.construct(&canvas(800, 400), &config).expect("construct");

    assert!(!factory.resize(&mut chart, Viewport::new(400, 200)).expect("resize"));
    assert_eq!(chart.viewport(), Viewport::new(800, 400));
}

#[test]
fn resizing_a_destroyed_chart_fails() {
    let mut factory = CanvasChartFactory::new(NullRenderer::default());
    let chart = factory
        .construct(&canvas(800, 400), &performance_chart_config().expect("config"))
        .expect("construct");
    let mut stale = chart.clone();
    factory.destroy(chart);

    assert!(factory.resize(&mut stale, Viewport::new(900, 500)).is_err());
}

#[test]
fn static_document_rejects_duplicate_and_empty_canvases() {
    let mut document = StaticDocument::new();
    document
        .insert_canvas("performanceChart", Viewport::new(10, 10))
        .expect("first");

    assert!(document.insert_canvas("performanceChart", Viewport::new(20, 20)).is_err());
    assert!(document.insert_canvas("other", Viewport::new(0, 20)).is_err());
    assert!(document.insert_canvas("", Viewport::new(20, 20)).is_err());
    assert!(document.resize_canvas("missing", Viewport::new(20, 20)).is_err());
    assert_eq!(document.element_ids().collect::<Vec<_>>(), ["performanceChart"]);
}
