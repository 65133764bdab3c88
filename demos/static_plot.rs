use dashplot::{AxisFormatter, PlotConfig, PlotView, RenderCommand};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"{
    "title": "Static",
    "x_axis": { "label": "Sample", "max_ticks": 7 },
    "y_axis": { "label": "Volts", "max_ticks": 5 },
    "grid": true
}"#;

fn main() -> dashplot::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut config = PlotConfig::from_json_str(CONFIG)?;
    config.y_axis = config
        .y_axis
        .with_formatter(AxisFormatter::Custom(Arc::new(|value: f64| format!("{value:.1} V"))));

    let mut plot = PlotView::builder().config(config).fixed(2).build()?;

    let x: Vec<f64> = (0..40).map(f64::from).collect();
    let ramp: Vec<f64> = x.iter().map(|v| v * 0.1).collect();
    let wave: Vec<f64> = x.iter().map(|v| (v * 0.3).sin() * 2.0).collect();
    plot.set_data(x, vec![ramp, wave])?;

    for command in plot.render_pass()? {
        match command {
            RenderCommand::TickLabel {
                axis,
                position,
                text,
                ..
            } => println!("{axis} tick  {text:>8} at ({:.1}, {:.1})", position.x, position.y),
            RenderCommand::Text { text, .. } if !text.is_empty() => println!("text    {text}"),
            _ => {}
        }
    }

    Ok(())
}
