//! headless — one simulated run with tick logging, wired the way the server
//! bootstrap does it.
//!
//! ```text
//! headless [config.json] [config.xml]
//! ```
//!
//! Environment: `BIOSIM_WRITE_TICKS`, `BIOSIM_LOG_ROOT`,
//! `BIOSIM_CLAIM_RUN_DIRS` (see `TickLogConfig`), `BIOSIM_TICKS` for the run
//! length, `RUST_LOG` for log output.

mod habitat;

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use anyhow::{anyhow, Context, Result};

use tl_core::{SimulationRunId, TickLogConfig, TickNumber};
use tl_sim::{SimController, SnapshotSource, TickListener};
use tl_writer::{allocate, allocate_claimed, select_writer, TickWriter, TickWriterAdapter};

use habitat::Habitat;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_TICKS:       u64 = 24;
const PROGRESS_EVERY:      u64 = 6;
const DEFAULT_CONFIG_XML:  &str = "<biosim>\n  <Globals crewsToUse=\"crew\"/>\n</biosim>\n";

// ── Progress output ───────────────────────────────────────────────────────────

struct ProgressLogger {
    every: u64,
}

impl TickListener for ProgressLogger {
    fn tick_completed(&mut self, sim_id: SimulationRunId, tick: TickNumber, _: &dyn SnapshotSource) {
        if tick.0 % self.every == 0 {
            log::info!("{sim_id}: reached {tick}");
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => TickLogConfig::from_json_file(Path::new(&path))
            .with_context(|| format!("loading {path}"))?,
        None => TickLogConfig::default(),
    }
    .with_env_overrides()?;

    let config_xml = match args.next() {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?,
        None => DEFAULT_CONFIG_XML.to_owned(),
    };

    let ticks = match std::env::var("BIOSIM_TICKS") {
        Ok(raw) => raw.trim().parse::<u64>().with_context(|| format!("BIOSIM_TICKS={raw:?}"))?,
        Err(_) => DEFAULT_TICKS,
    };

    // ── Run identity and writer ───────────────────────────────────────────────
    let sim_id = if config.write_ticks && config.claim_run_directories {
        allocate_claimed(&config.log_root)?
    } else {
        allocate(&config.log_root, config.write_ticks)?
    };
    log::info!("starting {sim_id} for {ticks} ticks");

    let writer = Arc::new(Mutex::new(select_writer(&config)));
    {
        let mut w = writer.lock().map_err(|_| anyhow!("tick writer lock poisoned"))?;
        w.open(sim_id)?;
        w.write_config(sim_id, &config_xml)?;
    }

    // ── Simulate ──────────────────────────────────────────────────────────────
    let mut ctl = SimController::new();
    ctl.start_run(sim_id, Box::new(Habitat::new()))?;
    ctl.add_listener(sim_id, Box::new(TickWriterAdapter::new(writer.clone())))?;
    ctl.add_listener(sim_id, Box::new(ProgressLogger { every: PROGRESS_EVERY }))?;

    let started = Instant::now();
    let final_tick = ctl.run_ticks(sim_id, ticks)?;
    ctl.end_run(sim_id)?;

    writer
        .lock()
        .map_err(|_| anyhow!("tick writer lock poisoned"))?
        .close()?;

    log::info!(
        "{sim_id} finished at {final_tick} in {:.1} ms",
        started.elapsed().as_secs_f64() * 1e3,
    );
    if config.write_ticks {
        log::info!("logs in {}", config.log_root.join(sim_id.dir_name()).display());
    }
    Ok(())
}
