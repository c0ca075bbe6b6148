//! A four-person habitat with a greenhouse.  Just enough dynamics for the
//! logged snapshots to change from tick to tick.

use serde_json::json;
use tl_core::{Snapshot, TickNumber};
use tl_sim::{SimModel, SimResult};

const CREW: [&str; 4] = ["Ada", "Bao", "Chidi", "Dana"];

// Per-person, per-tick exchange (moles).
const O2_USE:  f64 = 0.035;
const CO2_OUT: f64 = 0.030;

pub struct Habitat {
    tick:    TickNumber,
    o2:      f64,
    co2:     f64,
    biomass: f64,
}

impl Habitat {
    pub fn new() -> Self {
        Self { tick: TickNumber::ZERO, o2: 21.0, co2: 0.04, biomass: 10.0 }
    }

    /// Greenhouse lights run on a 16/8 cycle.
    fn lights_on(&self) -> bool {
        self.tick.0 % 24 < 16
    }
}

impl Default for Habitat {
    fn default() -> Self {
        Self::new()
    }
}

impl SimModel for Habitat {
    fn advance(&mut self, tick: TickNumber) -> SimResult<()> {
        self.tick = tick;
        let crew = CREW.len() as f64;
        self.o2 -= O2_USE * crew;
        self.co2 += CO2_OUT * crew;

        if self.lights_on() {
            let fixed = (self.co2 * 0.5).min(0.02 * self.biomass);
            self.co2 -= fixed;
            self.o2 += fixed;
            self.biomass += fixed * 0.1;
        }
        Ok(())
    }

    fn snapshot(&self) -> SimResult<Snapshot> {
        let crew: Vec<_> = CREW
            .iter()
            .map(|name| json!({ "name": name, "status": "nominal" }))
            .collect();

        let mut snap = Snapshot::new();
        snap.insert("tick".into(), json!(self.tick.0));
        snap.insert(
            "environment".into(),
            json!({ "o2": round3(self.o2), "co2": round3(self.co2) }),
        );
        snap.insert(
            "greenhouse".into(),
            json!({ "biomass": round3(self.biomass), "lights": self.lights_on() }),
        );
        snap.insert("crew".into(), json!(crew));
        Ok(snap)
    }
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
