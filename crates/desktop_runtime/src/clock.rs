//! Taskbar clock snapshot and formatting.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    pub hour: u32,
    pub minute: u32,
}

impl ClockSnapshot {
    /// Reads the local wall-clock time.
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }

    pub fn label(self) -> String {
        format_clock(self.hour, self.minute)
    }
}

/// Formats a 24-hour time as `h:mm AM|PM`.
pub fn format_clock(hour: u32, minute: u32) -> String {
    let suffix = if hour % 24 >= 12 { "PM" } else { "AM" };
    let mut display_hour = hour % 12;
    if display_hour == 0 {
        display_hour = 12;
    }
    format!("{display_hour}:{minute:02} {suffix}")
}
