use crate::cli::SimulateArgs;
use anyhow::{bail, Result};
use glide::{host::Host, Config, SimHost};
use std::{rc::Rc, time::Duration};

/// Id given to the simulated trigger element.
const TRIGGER_ID: &str = "glide-simulated-trigger";

/// Click the configured trigger on a simulated page and render the resulting
/// scroll writes, one line per step.
pub fn run(args: &SimulateArgs, config: &Config) -> Result<String> {
    if !args.from.is_finite() || !args.to.is_finite() {
        bail!("offsets must be finite numbers");
    }

    let host = Rc::new(SimHost::new());
    host.jump(args.from);
    host.add_element(TRIGGER_ID, 0.0);
    host.match_selector(config.trigger_selector.clone(), TRIGGER_ID);
    host.add_element(config.target_id.clone(), args.to);

    let _binding = glide::try_bind(Rc::clone(&host), config)?;
    host.click(&config.trigger_selector);
    let fired = host.run_until_idle();
    tracing::debug!(fired, offset = host.scroll_offset(), "simulation finished");

    Ok(render(&host.timeline()))
}

fn render(timeline: &[(Duration, f64)]) -> String {
    let mut lines = vec![format!("{:>4}  {:>6}  {:>9}", "step", "time", "offset")];
    for (step, (time, offset)) in timeline.iter().enumerate() {
        lines.push(format!(
            "{:>4}  {:>6}  {:>9.2}",
            step + 1,
            format!("{}ms", time.as_millis()),
            offset
        ));
    }
    let total = timeline.last().map_or(0, |(time, _)| time.as_millis());
    let noun = if timeline.len() == 1 { "step" } else { "steps" };
    lines.push(format!("{} {noun} over {total}ms", timeline.len()));
    lines.join("\n")
}
