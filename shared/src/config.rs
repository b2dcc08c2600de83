/// Engine configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Logic ticks per second
    pub logic_rate_hz: u32,
    /// Render frames per second
    pub frame_rate_hz: u32,
    /// Pixel-area width handed to scenes and draw listeners
    pub width: u32,
    /// Pixel-area height handed to scenes and draw listeners
    pub height: u32,
    pub rng_seed: u64,
    /// Bound of the input event queue
    pub input_capacity: usize,
    /// How often the render task logs average FPS (seconds)
    pub fps_log_interval_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            logic_rate_hz: 60,
            frame_rate_hz: 60,
            width: 800,
            height: 600,
            rng_seed: 42,
            input_capacity: 256,
            fps_log_interval_secs: 5,
        }
    }
}

/// Rates above this are treated as a typo rather than a request.
const MAX_RATE_HZ: u32 = 1000;

impl EngineConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.logic_rate_hz == 0 || self.logic_rate_hz > MAX_RATE_HZ {
            return Err(format!("logic_rate_hz must be in 1..={MAX_RATE_HZ}"));
        }
        if self.frame_rate_hz == 0 || self.frame_rate_hz > MAX_RATE_HZ {
            return Err(format!("frame_rate_hz must be in 1..={MAX_RATE_HZ}"));
        }
        if self.width == 0 || self.height == 0 {
            return Err("width and height must be > 0".to_string());
        }
        if self.input_capacity == 0 {
            return Err("input_capacity must be > 0".to_string());
        }
        Ok(())
    }

    /// Parse a JSON document and validate the result. Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| format!("invalid config JSON: {e}"))?;
        config.validate()?;
        Ok(config)
    }
}
