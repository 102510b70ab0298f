//! Weekly report rendering.
//!
//! Produces the WhatsApp-ready text summary the family shares each week:
//! top performers, who was active, who needs encouragement, and who is
//! behind. Rendering is pure over an [`AnalyticsSnapshot`]; gating access to
//! the report is the caller's concern.

use std::fmt::Write;
use std::sync::Arc;

use chrono::Utc;

use noor_core::progress::ProgressStore;

use crate::analytics_service::{AnalyticsService, AnalyticsSnapshot};

/// At most this many members are listed in the behind section.
const BEHIND_SECTION_LIMIT: usize = 5;

const DIVIDER: &str = "═══════════════════════";

/// Renders the weekly report from store snapshots.
pub struct ReportService {
    analytics: AnalyticsService,
}

impl ReportService {
    pub fn new(store: Arc<ProgressStore>) -> Self {
        Self {
            analytics: AnalyticsService::new(store),
        }
    }

    /// Takes a fresh snapshot and renders the report, dated today.
    pub async fn weekly_report(&self) -> String {
        let snapshot = self.analytics.snapshot().await;
        let date = Utc::now().format("%A, %B %-d, %Y").to_string();
        render(&snapshot, &date)
    }
}

/// Pure rendering of a snapshot into the report text.
pub fn render(snapshot: &AnalyticsSnapshot, date: &str) -> String {
    let mut report = String::new();

    let _ = writeln!(report, "📖 *Noor Journey - Weekly Progress Report*");
    let _ = writeln!(report, "🗓️ {}", date);
    let _ = writeln!(report);
    let _ = writeln!(report, "{}", DIVIDER);
    let _ = writeln!(report);

    let _ = writeln!(report, "🏆 *TOP PERFORMERS* 🌟");
    let _ = writeln!(report);
    for (index, entry) in snapshot.top_performers.iter().enumerate() {
        let medal = match index {
            0 => "🥇",
            1 => "🥈",
            _ => "🥉",
        };
        let _ = writeln!(report, "{} *{}*", medal, entry.name);
        let _ = writeln!(
            report,
            "   └ {} Juz | Surah {}, Ayah {}",
            entry.position.juz, entry.position.surah, entry.position.ayah
        );
        let _ = writeln!(report);
    }

    let _ = writeln!(
        report,
        "✅ *ACTIVE THIS WEEK* ({} members)",
        snapshot.active.len()
    );
    let _ = writeln!(report);
    for member in &snapshot.active {
        let status = if member.days_inactive == 0 {
            "📍 Updated today".to_string()
        } else {
            format!("📅 {}d ago", member.days_inactive)
        };
        let _ = writeln!(report, "• {} - {}", member.name, status);
    }

    if !snapshot.inactive.is_empty() {
        let _ = writeln!(report);
        let _ = writeln!(
            report,
            "⚠️ *NEEDS ENCOURAGEMENT* ({} members)",
            snapshot.inactive.len()
        );
        let _ = writeln!(report);
        for member in &snapshot.inactive {
            let _ = writeln!(
                report,
                "• {} - {} days inactive",
                member.name, member.days_inactive
            );
        }
    }

    if !snapshot.behind.is_empty() {
        let _ = writeln!(report);
        let _ = writeln!(report, "📚 *BEHIND IN PROGRESS*");
        let _ = writeln!(report);
        for member in snapshot.behind.iter().take(BEHIND_SECTION_LIMIT) {
            let _ = writeln!(
                report,
                "• {} - {} Juz completed",
                member.name, member.position.juz
            );
        }
    }

    let _ = writeln!(report);
    let _ = writeln!(report, "{}", DIVIDER);
    let _ = writeln!(report, "💡 *Keep going! Every ayah counts!*");
    let _ = write!(report, "🤲 May Allah make it easy for all of us.");

    report
}
