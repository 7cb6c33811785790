use perf_chart::api::{ChartInitializer, ChartType, ColorSpec, InitOutcome};
use perf_chart::core::Viewport;
use perf_chart::error::ChartError;
use perf_chart::host::{CanvasChartFactory, RecordingChartFactory, StaticDocument};
use perf_chart::performance::{CLASSIFIERS, PERFORMANCE_CHART_ID, PLACEHOLDER_ACCURACY};
use perf_chart::render::NullRenderer;

fn page_with_chart() -> StaticDocument {
    StaticDocument::new()
        .with_canvas(PERFORMANCE_CHART_ID, Viewport::new(800, 400))
        .expect("canvas")
}

fn run_once(document: &StaticDocument) -> RecordingChartFactory {
    let mut initializer = ChartInitializer::performance_chart().expect("initializer");
    let mut factory = RecordingChartFactory::new();
    let outcome = initializer
        .on_document_ready(document, &mut factory)
        .expect("initializer run");
    assert!(outcome.is_constructed());
    factory
}

#[test]
fn absent_target_is_a_silent_no_op() {
    let document = StaticDocument::new()
        .with_canvas("comparisonChart", Viewport::new(640, 320))
        .expect("canvas");
    let mut initializer = ChartInitializer::performance_chart().expect("initializer");
    let mut factory = RecordingChartFactory::new();

    let outcome = initializer
        .on_document_ready(&document, &mut factory)
        .expect("absent target must not fail");

    assert_eq!(outcome, InitOutcome::TargetAbsent);
    assert_eq!(factory.call_count(), 0);
    assert!(initializer.has_fired());
}

#[test]
fn empty_page_is_a_silent_no_op() {
    let mut initializer = ChartInitializer::performance_chart().expect("initializer");
    let mut factory = RecordingChartFactory::new();

    let outcome = initializer
        .on_document_ready(&StaticDocument::new(), &mut factory)
        .expect("empty page must not fail");

    assert_eq!(outcome.handle(), None);
    assert_eq!(factory.call_count(), 0);
}

#[test]
fn present_target_gets_exactly_one_bar_chart() {
    let factory = run_once(&page_with_chart());

    assert_eq!(factory.call_count(), 1);
    let call = &factory.calls[0];
    assert_eq!(call.element_id, PERFORMANCE_CHART_ID);
    assert_eq!(call.config.chart_type, ChartType::Bar);
}

#[test]
fn categories_and_values_are_passed_in_order() {
    let factory = run_once(&page_with_chart());
    let config = &factory.calls[0].config;

    assert_eq!(
        config.data.labels,
        ["Logistic Regression", "SVM", "Random Forest", "XGBoost", "Ensemble"]
    );
    assert_eq!(config.data.labels, CLASSIFIERS);
    assert_eq!(config.data.datasets.len(), 1);
    assert_eq!(config.data.datasets[0].label, "Accuracy");
    assert_eq!(config.data.datasets[0].data, [0.85, 0.88, 0.92, 0.91, 0.94]);
    assert_eq!(config.data.datasets[0].data, PLACEHOLDER_ACCURACY);
}

#[test]
fn fills_are_per_category_and_border_is_uniform() {
    let factory = run_once(&page_with_chart());
    let dataset = &factory.calls[0].config.data.datasets[0];

    let Some(ColorSpec::PerItem(fills)) = &dataset.background_color else {
        panic!("expected one fill colour per category");
    };
    let fills = fills.iter().map(|color| color.as_str()).collect::<Vec<_>>();
    assert_eq!(
        fills,
        [
            "rgba(231, 76, 60, 0.7)",
            "rgba(52, 152, 219, 0.7)",
            "rgba(46, 204, 113, 0.7)",
            "rgba(155, 89, 182, 0.7)",
            "rgba(241, 196, 15, 0.7)",
        ]
    );

    let Some(ColorSpec::Single(border)) = &dataset.border_color else {
        panic!("expected one shared border colour");
    };
    assert_eq!(border.as_str(), "rgba(255,255,255,0.8)");
    assert_eq!(dataset.border_width, 1.0);
}

#[test]
fn options_request_dark_zero_based_responsive_axes() {
    let factory = run_once(&page_with_chart());
    let options = &factory.calls[0].config.options;

    assert!(options.responsive);
    let y = options.scales.get("y").expect("value axis");
    let x = options.scales.get("x").expect("category axis");
    assert!(y.begin_at_zero);
    for axis in [y, x] {
        assert_eq!(axis.grid.color.as_ref().map(|c| c.as_str()), Some("#444"));
        assert_eq!(axis.ticks.color.as_ref().map(|c| c.as_str()), Some("#ddd"));
    }
    assert_eq!(
        options.plugins.legend.labels.color.as_ref().map(|c| c.as_str()),
        Some("white")
    );
}

#[test]
fn second_ready_event_does_not_construct_again() {
    let document = page_with_chart();
    let mut initializer = ChartInitializer::performance_chart().expect("initializer");
    let mut factory = RecordingChartFactory::new();

    let first = initializer
        .on_document_ready(&document, &mut factory)
        .expect("first run");
    let second = initializer
        .on_document_ready(&document, &mut factory)
        .expect("second run");

    assert_eq!(first, InitOutcome::Constructed(1));
    assert_eq!(second, InitOutcome::AlreadyInitialized);
    assert_eq!(factory.call_count(), 1);
}

#[test]
fn factory_failure_propagates_and_is_not_retried() {
    let document = page_with_chart();
    let mut initializer = ChartInitializer::performance_chart().expect("initializer");
    let mut factory = RecordingChartFactory::failing("charting runtime missing");

    let err = initializer
        .on_document_ready(&document, &mut factory)
        .expect_err("factory failure must surface");
    assert!(matches!(err, ChartError::InvalidData(message) if message == "charting runtime missing"));

    let retry = initializer
        .on_document_ready(&document, &mut factory)
        .expect("later runs are no-ops");
    assert_eq!(retry, InitOutcome::AlreadyInitialized);
    assert_eq!(factory.call_count(), 1);
}

#[test]
fn built_in_factory_renders_chart_onto_target_canvas() {
    let document = page_with_chart();
    let mut initializer = ChartInitializer::performance_chart().expect("initializer");
    let mut factory = CanvasChartFactory::new(NullRenderer::default());

    let chart = initializer
        .on_document_ready(&document, &mut factory)
        .expect("run")
        .handle()
        .expect("chart constructed");

    assert_eq!(chart.element_id(), PERFORMANCE_CHART_ID);
    assert_eq!(chart.viewport(), Viewport::new(800, 400));
    // Five bars plus one legend swatch.
    assert_eq!(chart.frame().rects.len(), 6);
    assert_eq!(factory.renderer().frames_rendered, 1);
    assert_eq!(factory.renderer().last_rect_count, 6);
    assert!(factory.is_bound(PERFORMANCE_CHART_ID));
}

#[test]
fn duplicate_initializers_cannot_share_a_canvas() {
    let document = page_with_chart();
    let mut factory = CanvasChartFactory::new(NullRenderer::default());

    let mut first = ChartInitializer::performance_chart().expect("initializer");
    let mut second = ChartInitializer::performance_chart().expect("initializer");
    first
        .on_document_ready(&document, &mut factory)
        .expect("first initializer");
    let err = second
        .on_document_ready(&document, &mut factory)
        .expect_err("canvas already in use");

    assert!(matches!(err, ChartError::CanvasInUse { element_id } if element_id == PERFORMANCE_CHART_ID));
    assert_eq!(factory.bound_count(), 1);
    assert_eq!(factory.renderer().frames_rendered, 1);
}

#[test]
fn custom_initializer_rejects_invalid_config() {
    let mut config = perf_chart::performance::performance_chart_config().expect("config");
    config.data.datasets[0].data.pop();

    let err = ChartInitializer::new("otherChart", config).expect_err("misaligned data");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
