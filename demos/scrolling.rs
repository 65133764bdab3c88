use std::time::{Duration, Instant};

use dashplot::{PlotView, RenderCommand, ScreenRect};
use tracing_subscriber::EnvFilter;

fn main() -> dashplot::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut plot = PlotView::builder()
        .title("Scroll Me")
        .widget(ScreenRect::from_origin_size(0.0, 0.0, 400.0, 300.0))
        .scrolling(50, 3)
        .build()?;

    let duration_secs: f64 = std::env::var("DURATION_SECS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(2.0);

    let start = Instant::now();
    let mut frames = 0_usize;
    while start.elapsed().as_secs_f64() < duration_secs {
        let t = start.elapsed().as_secs_f64();
        plot.add_point(t, &[t.sin(), (2.0 * t).cos() * 0.5, (t * 0.7).sin() * 2.0])?;

        let frame = plot.render_pass()?;
        frames += 1;
        if frames % 10 == 0 {
            let markers = frame
                .iter()
                .filter(|command| matches!(command, RenderCommand::Marker { .. }))
                .count();
            let view = plot.viewport();
            println!(
                "frame {:>4}: {:>4} commands, {:>3} markers, x {:.2}..{:.2}, y {:.2}..{:.2}",
                frames,
                frame.len(),
                markers,
                view.x.min,
                view.x.max,
                view.y.min,
                view.y.max
            );
        }

        std::thread::sleep(Duration::from_millis(20));
    }

    println!("scrolling demo complete: {frames} frames");
    Ok(())
}
