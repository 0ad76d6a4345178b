use std::cell::Cell;
use chrono::{Local, NaiveDateTime};

/// Fuente de tiempo. En el navegador es el reloj del sistema; los tests
/// usan ManualClock para simular el paso del tiempo.
pub trait Clock {
    /// Milisegundos desde epoch
    fn now_ms(&self) -> f64;

    /// Fecha/hora local (sin zona), para comparar con lo que elige el usuario
    fn now_local(&self) -> NaiveDateTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(target_arch = "wasm32")]
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_ms(&self) -> f64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }

    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

pub struct ManualClock {
    start: NaiveDateTime,
    elapsed_ms: Cell<f64>,
}

impl ManualClock {
    pub fn at(start: NaiveDateTime) -> Self {
        Self {
            start,
            elapsed_ms: Cell::new(0.0),
        }
    }

    pub fn advance(&self, ms: f64) {
        self.elapsed_ms.set(self.elapsed_ms.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.start.and_utc().timestamp_millis() as f64 + self.elapsed_ms.get()
    }

    fn now_local(&self) -> NaiveDateTime {
        self.start + chrono::Duration::milliseconds(self.elapsed_ms.get() as i64)
    }
}
