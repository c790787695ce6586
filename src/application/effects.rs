//! Decorative confetti effect.
//!
//! The burst itself is drawn in the browser by the particle engine; the
//! server owns its configuration and hands out one [`Burst`] per trigger.
//! The configuration is fixed and has no relation to dashboard data.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// One requested burst.
///
/// `key` grows with every trigger so the client can remount the particle
/// container and replay the animation.
#[derive(Debug, Clone, Serialize)]
pub struct Burst {
    pub key: u64,
    pub options: &'static ConfettiOptions,
}

/// Fires the decorative effect.
///
/// Implementations must not fail; the effect is best-effort.
#[cfg_attr(test, mockall::automock)]
pub trait EffectTrigger: Send + Sync {
    fn fire(&self) -> Burst;
}

/// Default trigger: counts bursts and returns [`CONFETTI_OPTIONS`].
#[derive(Debug, Default)]
pub struct ConfettiController {
    fired: AtomicU64,
}

impl ConfettiController {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EffectTrigger for ConfettiController {
    fn fire(&self) -> Burst {
        let key = self.fired.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(key, "Confetti burst");
        metrics::counter!("dashboard_effect_bursts_total").increment(1);

        Burst {
            key,
            options: &CONFETTI_OPTIONS,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Serialize)]
pub struct ValueOf<T> {
    pub value: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullScreen {
    pub enable: bool,
    pub z_index: u32,
}

#[derive(Debug, Serialize)]
pub struct Animation {
    pub enable: bool,
    pub speed: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutModes {
    pub default: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Motion {
    pub direction: &'static str,
    pub enable: bool,
    pub out_modes: OutModes,
    pub size: bool,
    pub speed: Range,
}

#[derive(Debug, Serialize)]
pub struct Density {
    pub enable: bool,
    pub area: u32,
}

#[derive(Debug, Serialize)]
pub struct Count {
    pub value: u32,
    pub density: Density,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpacityAnimation {
    pub enable: bool,
    pub start_value: &'static str,
    pub destroy: &'static str,
    pub speed: f64,
    pub sync: bool,
}

#[derive(Debug, Serialize)]
pub struct Opacity {
    pub value: f64,
    pub animation: OpacityAnimation,
}

/// Shared shape of the `rotate` and `tilt` sections. Only `tilt` carries
/// an `enable` flag.
#[derive(Debug, Serialize)]
pub struct Spin {
    pub value: Range,
    pub direction: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(rename = "move")]
    pub moves: bool,
    pub animation: Animation,
}

#[derive(Debug, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kinds: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Shade {
    pub enable: bool,
    pub value: u32,
}

#[derive(Debug, Serialize)]
pub struct Roll {
    pub darken: Shade,
    pub enlighten: Shade,
    pub enable: bool,
    pub speed: Range,
}

#[derive(Debug, Serialize)]
pub struct Wobble {
    pub distance: u32,
    pub enable: bool,
    #[serde(rename = "move")]
    pub moves: bool,
    pub speed: Range,
}

#[derive(Debug, Serialize)]
pub struct Particles {
    pub color: ValueOf<&'static [&'static str]>,
    #[serde(rename = "move")]
    pub motion: Motion,
    pub number: Count,
    pub opacity: Opacity,
    pub rotate: Spin,
    pub tilt: Spin,
    pub shape: Shape,
    pub size: ValueOf<Range>,
    pub roll: Roll,
    pub wobble: Wobble,
}

/// Options object understood by the client-side particle engine.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfettiOptions {
    pub preset: &'static str,
    pub background: ValueOf<ValueOf<&'static str>>,
    pub full_screen: FullScreen,
    pub particles: Particles,
}

/// The one confetti configuration the dashboard uses.
pub static CONFETTI_OPTIONS: ConfettiOptions = ConfettiOptions {
    preset: "confetti",
    background: ValueOf {
        value: ValueOf {
            value: "transparent",
        },
    },
    full_screen: FullScreen {
        enable: false,
        z_index: 1000,
    },
    particles: Particles {
        color: ValueOf {
            value: &[
                "#667eea", "#764ba2", "#f093fb", "#f5576c", "#4facfe", "#00f2fe",
            ],
        },
        motion: Motion {
            direction: "bottom",
            enable: true,
            out_modes: OutModes { default: "out" },
            size: true,
            speed: Range { min: 1.0, max: 3.0 },
        },
        number: Count {
            value: 50,
            density: Density {
                enable: true,
                area: 800,
            },
        },
        opacity: Opacity {
            value: 1.0,
            animation: OpacityAnimation {
                enable: true,
                start_value: "max",
                destroy: "min",
                speed: 0.3,
                sync: true,
            },
        },
        rotate: Spin {
            value: Range {
                min: 0.0,
                max: 360.0,
            },
            direction: "random",
            enable: None,
            moves: true,
            animation: Animation {
                enable: true,
                speed: 60.0,
            },
        },
        tilt: Spin {
            value: Range {
                min: 0.0,
                max: 360.0,
            },
            direction: "random",
            enable: Some(true),
            moves: true,
            animation: Animation {
                enable: true,
                speed: 60.0,
            },
        },
        shape: Shape {
            kinds: &["square", "circle"],
        },
        size: ValueOf {
            value: Range { min: 2.0, max: 4.0 },
        },
        roll: Roll {
            darken: Shade {
                enable: true,
                value: 30,
            },
            enlighten: Shade {
                enable: true,
                value: 30,
            },
            enable: true,
            speed: Range {
                min: 5.0,
                max: 15.0,
            },
        },
        wobble: Wobble {
            distance: 30,
            enable: true,
            moves: true,
            speed: Range {
                min: -7.0,
                max: 7.0,
            },
        },
    },
};
