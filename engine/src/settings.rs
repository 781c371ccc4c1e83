use std::time::Duration;

use crate::game::grid::FieldSize;

/// Tunables for a play session. Defaults reproduce the classic layout:
/// a 50x40 field, 30 short obstacle segments, a 10x10 spawn-safe corner,
/// 16 simulation ticks per second in play and 15 on menu screens.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSettings {
    pub field_width: usize,
    pub field_height: usize,
    pub obstacle_segments: usize,
    pub max_segment_length: usize,
    pub safe_zone: usize,
    pub play_tick_ms: u64,
    pub menu_tick_ms: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_width: 50,
            field_height: 40,
            obstacle_segments: 30,
            max_segment_length: 2,
            safe_zone: 10,
            play_tick_ms: 62,
            menu_tick_ms: 66,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.field_width < 10 || self.field_width > 100 {
            return Err("Field width must be between 10 and 100".to_string());
        }
        if self.field_height < 10 || self.field_height > 100 {
            return Err("Field height must be between 10 and 100".to_string());
        }
        if self.obstacle_segments > 200 {
            return Err("Obstacle segment count must be at most 200".to_string());
        }
        if self.max_segment_length < 1 || self.max_segment_length > 10 {
            return Err("Obstacle segment length must be between 1 and 10".to_string());
        }
        if self.safe_zone >= self.field_width && self.safe_zone >= self.field_height {
            // Obstacle placement rejection-samples start cells outside the
            // safe corner; it must leave at least one eligible cell.
            return Err("Safe zone must not cover the whole field".to_string());
        }
        if self.play_tick_ms < 50 || self.play_tick_ms > 5000 {
            return Err("Play tick interval must be between 50ms and 5000ms".to_string());
        }
        if self.menu_tick_ms < 50 || self.menu_tick_ms > 5000 {
            return Err("Menu tick interval must be between 50ms and 5000ms".to_string());
        }
        Ok(())
    }

    pub fn field_size(&self) -> FieldSize {
        FieldSize {
            width: self.field_width,
            height: self.field_height,
        }
    }

    pub fn play_tick_interval(&self) -> Duration {
        Duration::from_millis(self.play_tick_ms)
    }

    pub fn menu_tick_interval(&self) -> Duration {
        Duration::from_millis(self.menu_tick_ms)
    }
}
