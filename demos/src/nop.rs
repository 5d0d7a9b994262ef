use std::time::Duration;

use anyhow::Result;

use pulsegen::prelude::*;

use textplots::{Chart, Plot, Shape};

struct TerminalPlot;

impl Preview for TerminalPlot {
    fn render(&mut self, samples: &[f64], period_ms: f64, shape: ShapeKind) {
        let dt = period_ms / samples.len() as f64;
        let points = samples
            .iter()
            .enumerate()
            .map(|(i, v)| ((i as f64 * dt) as f32, *v as f32))
            .collect::<Vec<_>>();
        let shape = match shape {
            ShapeKind::Stepped => Shape::Steps(&points),
            ShapeKind::Continuous => Shape::Lines(&points),
        };
        Chart::new(180, 40, 0.0, period_ms as f32)
            .lineplot(&shape)
            .display();
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let option: ControllerOption = ControllerOption {
        upload_settle: Duration::ZERO,
        arm_settle: Duration::ZERO,
        ..Default::default()
    };
    let mut pulsegen = Controller::with_option(Nop::new(), option);

    // square spike followed by a square reference
    {
        let waveform = Biphasic::new(2.0, 1.0, 3., 7.);
        println!("SQU - SQUR");
        preview(waveform, &mut TerminalPlot)?;
        pulsegen.load_profile(waveform, Playback::Burst)?;
        pulsegen.set_output(true)?;
        pulsegen.fire_trigger()?;
    }

    // triangular segments paired with the delayed inverse
    {
        let waveform = Biphasic::new(2.0, 1.0, 4., 4.)
            .with_spike_shape(SegmentShape::Triangle)
            .with_ref_shape(SegmentShape::Triangle)
            .with_delay(1.5);
        println!("TRI - TRI, 1.5 ms delay");
        preview(waveform, &mut TerminalPlot)?;
        pulsegen.load_profile(waveform, Playback::Burst)?;
        pulsegen.fire_trigger()?;
    }

    // alpha synapse model
    {
        let alpha = |t: f64| t * (1. - t).exp();
        println!("Model");
        preview(ModelFunction::new(alpha, 0., 8., 200, 10.), &mut TerminalPlot)?;
        pulsegen.load_profile(ModelFunction::new(alpha, 0., 8., 200, 10.), Playback::Burst)?;
        pulsegen.fire_trigger()?;
    }

    pulsegen.reset(Duration::from_millis(100), 0.)?;
    pulsegen.set_output(false)?;

    if let Err(e) = pulsegen.fire_trigger() {
        println!("{e}");
    }

    Ok(())
}
