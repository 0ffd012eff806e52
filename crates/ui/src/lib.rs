//! Iced application shell for the monitor.
//!
//! Owns the refresh cycle: a fixed-period timer subscription produces
//! [`Message::Tick`]; each tick runs one sampling cycle against the metrics
//! store, re-evaluates the alert thresholds, and leaves a fresh snapshot for
//! the next redraw.  Everything runs on the Iced event loop, so a sampling
//! cycle can never overlap itself or a read — the brief blocking inside
//! `sample()` is the CPU sampling window and stays on this thread on
//! purpose.

use chrono::{DateTime, Local};
use iced::widget::canvas::Canvas;
use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length, Size, Subscription, Task};
use std::time::Duration;
use tracing::warn;
use vitals_config::Settings;
use vitals_core::{
    event::Message,
    state::{HostInfo, MetricsSnapshot},
    MonitorError, Result,
};
use vitals_metrics::{check_thresholds, Alert, MetricsSource, MetricsStore, SysinfoSource};
use vitals_theme::{Palette, Theme};
use vitals_widgets::{
    AlertBanner, CpuReadout, DiskReadout, HistoryChart, HostReadout, MemoryReadout,
    NetworkReadout, UsagePie,
};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the monitor window and block until it closes.
///
/// Fails fast on invalid settings or an unmounted disk path, before any
/// window appears.
pub fn run(settings: Settings) -> Result<()> {
    settings.validate()?;

    let source = SysinfoSource::new(&settings.disk_mount)?;
    let host = source.host_info();
    let store = MetricsStore::new(source, settings.history_capacity)?;
    let monitor: Monitor = Monitor::new(store, settings, host);

    iced::application(Monitor::title, Monitor::update, Monitor::view)
        .subscription(Monitor::subscription)
        .theme(Monitor::iced_theme)
        .window_size(Size::new(820.0, 560.0))
        .run_with(move || (monitor, Task::none()))
        .map_err(|e| MonitorError::Ui(e.to_string()))
}

// ── State ─────────────────────────────────────────────────────────────────────

/// Application model — the single concrete view implementation.
///
/// Its capability set towards the core is deliberately small:
/// `render_metrics` / `render_alert` (both folded into [`view`](Self::view))
/// and [`set_theme`](Self::set_theme).
struct Monitor<S = SysinfoSource> {
    store:      MetricsStore<S>,
    settings:   Settings,
    host:       HostInfo,
    snapshot:   MetricsSnapshot,
    alert:      Option<Alert>,
    theme:      Theme,
    sampled_at: Option<DateTime<Local>>,
    // Readout widgets
    cpu:      CpuReadout,
    memory:   MemoryReadout,
    disk:     DiskReadout,
    network:  NetworkReadout,
    hostline: HostReadout,
    banner:   AlertBanner,
}

impl<S: MetricsSource> Monitor<S> {
    fn new(store: MetricsStore<S>, settings: Settings, host: HostInfo) -> Self {
        Self {
            store,
            settings,
            host,
            snapshot:   MetricsSnapshot::default(),
            alert:      None,
            theme:      Theme::default(),
            sampled_at: None,
            cpu:      CpuReadout::new(),
            memory:   MemoryReadout::new(),
            disk:     DiskReadout::new(),
            network:  NetworkReadout::new(),
            hostline: HostReadout::new(),
            banner:   AlertBanner::new(),
        }
    }

    fn title(&self) -> String {
        String::from("vitals")
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                // One sampling cycle.  A failure is fatal for this cycle
                // only: keep the previous snapshot on screen and let the
                // next tick try again.
                match self.store.update() {
                    Ok(()) => {
                        self.snapshot = self.store.snapshot();
                        self.alert = check_thresholds(&self.store);
                        self.sampled_at = Some(Local::now());
                    }
                    Err(e) => warn!("sampling cycle failed, keeping previous readings: {e}"),
                }
            }
            Message::ThemeToggled => self.set_theme(self.theme.toggled()),
        }
        Task::none()
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    /// Fixed-period refresh timer.  The event loop serializes ticks, so a
    /// cycle that overruns the period simply delays the next one — cycles
    /// never overlap.
    fn subscription(&self) -> Subscription<Message> {
        iced::time::every(Duration::from_millis(self.settings.refresh_interval_ms))
            .map(|_| Message::Tick)
    }

    fn iced_theme(&self) -> iced::Theme {
        self.theme.to_iced()
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let palette = self.theme.palette();

        let heading = column![
            text("System Monitor").size(22).color(palette.accent.to_iced()),
            self.hostline.view(&self.host, palette),
        ]
        .spacing(2);

        let header = row![
            heading,
            horizontal_space(),
            button(text(self.theme.toggled().label()).size(14)).on_press(Message::ThemeToggled),
        ]
        .align_y(Alignment::Center);

        let body = column![
            header,
            self.render_alert(palette),
            self.render_metrics(palette),
        ]
        .spacing(12)
        .padding(16);

        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(palette.background.to_iced().into()),
                text_color: Some(palette.foreground.to_iced()),
                ..container::Style::default()
            })
            .into()
    }

    fn render_alert(&self, palette: &'static Palette) -> Element<'_, Message> {
        self.banner.view(self.alert.as_ref(), palette)
    }

    fn render_metrics(&self, palette: &'static Palette) -> Element<'_, Message> {
        let readouts = row![
            self.cpu.view(&self.snapshot, palette),
            self.memory.view(&self.snapshot, palette),
            self.disk.view(&self.snapshot, palette),
            self.network.view(&self.snapshot, palette),
        ]
        .spacing(24)
        .align_y(Alignment::Center);

        let history = Canvas::new(HistoryChart {
            cpu: self.snapshot.cpu_history.clone(),
            mem: self.snapshot.mem_history.clone(),
            capacity: self.store.capacity(),
            palette,
        })
        .width(Length::FillPortion(3))
        .height(Length::Fixed(220.0));

        let pie = Canvas::new(UsagePie {
            used_percent: self.snapshot.disk_usage,
            palette,
        })
        .width(Length::FillPortion(1))
        .height(Length::Fixed(220.0));

        let charts = row![history, pie].spacing(16);

        let footer = match self.sampled_at {
            Some(at) => text(format!("sampled at {}", at.format("%H:%M:%S")))
                .size(12)
                .color(palette.muted.to_iced()),
            None => text("waiting for first sample")
                .size(12)
                .color(palette.muted.to_iced()),
        };

        column![readouts, charts, footer].spacing(12).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use vitals_core::MetricSample;

    /// Replays scripted samples, then errors.
    struct ScriptedSource {
        samples: VecDeque<MetricSample>,
    }

    impl MetricsSource for ScriptedSource {
        fn sample(&mut self) -> Result<MetricSample> {
            self.samples
                .pop_front()
                .ok_or_else(|| MonitorError::Source("script exhausted".into()))
        }
    }

    fn monitor_with(samples: Vec<MetricSample>) -> Monitor<ScriptedSource> {
        let source = ScriptedSource {
            samples: samples.into(),
        };
        let store = MetricsStore::new(source, 10).unwrap();
        Monitor::new(store, Settings::default(), HostInfo::default())
    }

    fn sample(cpu: f64, mem: f64, disk: f64) -> MetricSample {
        MetricSample {
            cpu_percent: cpu,
            memory_percent: mem,
            disk_percent: disk,
            bytes_sent: 0,
            bytes_received: 0,
        }
    }

    #[test]
    fn tick_refreshes_snapshot_and_alert() {
        let mut monitor = monitor_with(vec![sample(95.0, 10.0, 10.0)]);
        let _ = monitor.update(Message::Tick);

        assert_eq!(monitor.snapshot.cpu_history, vec![95.0]);
        assert!(matches!(monitor.alert, Some(Alert::HighCpu(_))));
        assert!(monitor.sampled_at.is_some());
    }

    #[test]
    fn failed_tick_keeps_previous_snapshot() {
        let mut monitor = monitor_with(vec![sample(40.0, 30.0, 20.0)]);
        let _ = monitor.update(Message::Tick);
        let shown = monitor.snapshot.clone();

        // Script is exhausted now: the cycle fails, display stays stale-but-valid.
        let _ = monitor.update(Message::Tick);
        assert_eq!(monitor.snapshot.cpu_history, shown.cpu_history);
        assert_eq!(monitor.snapshot.disk_usage, shown.disk_usage);
    }

    #[test]
    fn alert_clears_once_readings_drop() {
        let mut monitor = monitor_with(vec![sample(95.0, 10.0, 10.0), sample(5.0, 5.0, 5.0)]);
        let _ = monitor.update(Message::Tick);
        assert!(monitor.alert.is_some());

        let _ = monitor.update(Message::Tick);
        assert!(monitor.alert.is_none());
    }

    #[test]
    fn chart_window_comes_from_the_store() {
        // The chart's x scale must track the store's actual bound, not a
        // second copy of the setting.
        let monitor = monitor_with(vec![]);
        assert_eq!(monitor.store.capacity(), monitor.settings.history_capacity);
    }

    #[test]
    fn theme_toggle_flips_explicit_state() {
        let mut monitor = monitor_with(vec![]);
        assert_eq!(monitor.theme, Theme::Dark);

        let _ = monitor.update(Message::ThemeToggled);
        assert_eq!(monitor.theme, Theme::Light);

        let _ = monitor.update(Message::ThemeToggled);
        assert_eq!(monitor.theme, Theme::Dark);
    }
}
