//! burst — smallest demo for the rust_kin framework.
//!
//! Spawns a handful of mobiles in a vertical column, gives each one a
//! two-phase profile toward x = 100 with randomized accelerations, and lets
//! a single on-update callback drive them from integration results.  The
//! stage goes quiet on its own once every profile has completed and the
//! callbacks have pruned themselves.

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use kin_core::{StageConfig, Vec2};
use kin_profile::{ProfileCell, ProfileRequest};
use kin_stage::Stage;

// ── Constants ─────────────────────────────────────────────────────────────────

const MOBILE_COUNT:   usize = 5;
const SEED:           u64   = 42;
const TARGET:         f64   = 100.0;
const REPORT_EVERY:   u64   = 10;  // frames between printed snapshots
const FRAME_BUDGET:   u64   = 600; // 10 s at 60 Hz, ample for every profile

fn main() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut stage = Stage::new(StageConfig::default());

    // ── Spawn mobiles and plan their profiles ─────────────────────────────
    let mut longest = 0.0f64;
    for i in 0..MOBILE_COUNT {
        let id = stage
            .mobiles_mut()
            .spawn_labeled(Vec2::new(0.0, i as f64 * 10.0), &format!("mobile-{i}"));

        let a0 = rng.gen_range(200.0..600.0);
        let a1 = -rng.gen_range(500.0..2500.0);
        let mut cell = ProfileCell::new(ProfileRequest::to_rest(TARGET, 0.0, a0, a1));

        let profile = *cell
            .profile()
            .with_context(|| format!("profile for mobile {i} (a0={a0:.0}, a1={a1:.0})"))?;
        longest = longest.max(profile.time);
        println!(
            "{id}: a0={a0:7.1} a1={a1:7.1} dt0={:.3}s dt1={:.3}s vmax={:.1}",
            profile.dt0, profile.dt1, profile.vmax
        );

        let total_time = profile.time;
        stage.register_on_update(move |ctx| {
            let t = ctx.info.time;
            let Ok(result) = cell.integrate(t) else { return false };
            let Ok(mobile) = ctx.mobiles.get_mut(id) else { return false };
            mobile.position.x = result.distance;
            mobile.velocity.x = result.velocity;
            mobile.mark_dirty();
            t < total_time
        });
    }

    // ── Reporting callback ────────────────────────────────────────────────
    let deadline = longest;
    stage.register_on_update(move |ctx| {
        if ctx.info.frame % REPORT_EVERY == 0 {
            let line: Vec<String> = ctx
                .mobiles
                .iter()
                .map(|m| format!("{}={:6.2}", m.label, m.position.x))
                .collect();
            println!("t={:6.3}s  {}", ctx.info.time, line.join("  "));
        }
        ctx.info.time <= deadline
    });

    // ── Run ───────────────────────────────────────────────────────────────
    stage.request_burst(0.25);
    let executed = stage.run_ticks(FRAME_BUDGET);

    println!("executed {executed} of {FRAME_BUDGET} frames ({})", stage.clock());
    for mobile in stage.mobiles().iter() {
        println!("{}: final x = {:.4}", mobile.label, mobile.position.x);
    }

    Ok(())
}
