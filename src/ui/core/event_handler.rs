use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::time::{Duration, Instant};

/// Interval between ticks when no terminal input is waiting.
/// Background results are only picked up on ticks.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Terminal input source for the render loop
pub struct EventHandler {
    tick_rate: Duration,
    last_render_time: Instant,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(TICK_RATE)
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_render_time: Instant::now(),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Next key press or resize, or a tick once the tick interval passes idle
    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        if event::poll(Duration::ZERO)? {
            return Ok(match event::read()? {
                // Ignore release and repeat events reported by some terminals
                Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
                Event::Resize(width, height) => EventType::Resize(width, height),
                _ => EventType::Other,
            });
        }

        tokio::time::sleep(self.tick_rate).await;
        Ok(EventType::Tick)
    }

    pub fn mark_rendered(&mut self) {
        self.last_render_time = Instant::now();
    }

    pub fn time_since_last_render(&self) -> Duration {
        self.last_render_time.elapsed()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}
