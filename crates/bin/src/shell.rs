//! HUD shell: score display, high score and the advice line.

use advisor::{AdviceDesk, TextService};
use sim::{SessionStats, ShellEvent};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

/// Name for the next round: a generated nickname when a theme is set,
/// else the configured name.
pub async fn choose_name<S: TextService>(service: &S, theme: Option<&str>, default_name: &str) -> String {
    match theme.map(str::trim).filter(|theme| !theme.is_empty()) {
        Some(theme) => {
            let name = service.nickname(theme).await;
            info!("Generated nickname {:?} for theme {:?}", name, theme);
            name
        }
        None => default_name.to_string(),
    }
}

pub struct Hud<S> {
    desk: AdviceDesk<S>,
    mass: u32,
    threats: u32,
    high_score: u32,
    rounds: u32,
}

impl<S: TextService> Hud<S> {
    pub fn new(service: Arc<S>, advice_ttl: Duration) -> Self {
        Self {
            desk: AdviceDesk::new(service, advice_ttl),
            mass: 0,
            threats: 0,
            high_score: 0,
            rounds: 0,
        }
    }

    pub fn mass(&self) -> u32 {
        self.mass
    }

    pub fn threats(&self) -> u32 {
        self.threats
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// React to one simulation event. Threats on screen trigger a request for advice.
    pub fn handle(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::ScoreUpdate { mass, threats } => {
                self.mass = mass;
                self.threats = threats;
                debug!("HUD: mass {}, {} threats", mass, threats);
                if threats > 0 && self.desk.current().is_none() && self.desk.request(mass, threats) {
                    debug!("Asked for advice");
                }
            }
            ShellEvent::GameOver { final_mass } => {
                self.mass = final_mass;
                self.high_score = self.high_score.max(final_mass);
                info!("Game over! Final mass {}, high score {}", final_mass, self.high_score);
            }
        }
    }

    /// Pick up finished advice. Returns newly arrived text.
    pub fn poll_advice(&mut self, now: Instant) -> Option<String> {
        let text = self.desk.poll(now)?;
        info!("Advisor: {}", text);
        Some(text.to_string())
    }

    pub fn advice(&self) -> Option<&str> {
        self.desk.current()
    }

    /// Any phase change makes pending or shown advice stale.
    pub fn phase_changed(&mut self) {
        self.desk.invalidate();
        self.threats = 0;
    }

    /// Summarise a finished round. Rounds cut short still count toward the high score.
    pub fn finish_round(&mut self, stats: SessionStats) {
        self.rounds += 1;
        self.high_score = self.high_score.max(stats.max_mass);
        info!(
            "Round {} summary: max mass {}, {} cells eaten, alive {} ticks, high score {}",
            self.rounds, stats.max_mass, stats.cells_eaten, stats.time_alive, self.high_score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned;

    impl TextService for Canned {
        async fn nickname(&self, theme: &str) -> String {
            format!("{theme}!")
        }

        async fn advice(&self, mass: u32, threats: u32) -> String {
            format!("{mass}/{threats}")
        }
    }

    async fn settle(hud: &mut Hud<Canned>) -> Option<String> {
        settle_at(hud, Instant::now()).await
    }

    async fn settle_at(hud: &mut Hud<Canned>, now: Instant) -> Option<String> {
        for _ in 0..100 {
            if let Some(text) = hud.poll_advice(now) {
                return Some(text);
            }
            tokio::task::yield_now().await;
        }
        None
    }

    #[tokio::test]
    async fn test_choose_name() {
        assert_eq!(choose_name(&Canned, Some("lava"), "Guest").await, "lava!");
        assert_eq!(choose_name(&Canned, Some("  "), "Guest").await, "Guest");
        assert_eq!(choose_name(&Canned, None, "Guest").await, "Guest");
    }

    #[tokio::test]
    async fn test_threats_bring_advice() {
        let mut hud = Hud::new(Arc::new(Canned), Duration::from_secs(8));
        hud.handle(ShellEvent::ScoreUpdate { mass: 25, threats: 0 });
        assert_eq!(settle(&mut hud).await, None);

        hud.handle(ShellEvent::ScoreUpdate { mass: 30, threats: 2 });
        assert_eq!(hud.threats(), 2);
        assert_eq!(settle(&mut hud).await.as_deref(), Some("30/2"));
        assert_eq!(hud.advice(), Some("30/2"));
        // Same advice is not announced twice.
        assert_eq!(hud.poll_advice(Instant::now()), None);
    }

    #[tokio::test]
    async fn test_repeated_advice_is_announced_again() {
        let mut hud = Hud::new(Arc::new(Canned), Duration::from_secs(8));
        let start = Instant::now();
        hud.handle(ShellEvent::ScoreUpdate { mass: 30, threats: 2 });
        assert_eq!(settle_at(&mut hud, start).await.as_deref(), Some("30/2"));

        let later = start + Duration::from_secs(8);
        assert_eq!(hud.poll_advice(later), None);
        assert_eq!(hud.advice(), None);

        hud.handle(ShellEvent::ScoreUpdate { mass: 30, threats: 2 });
        assert_eq!(settle_at(&mut hud, later).await.as_deref(), Some("30/2"));
        assert_eq!(hud.advice(), Some("30/2"));
    }

    #[tokio::test]
    async fn test_phase_change_clears_advice() {
        let mut hud = Hud::new(Arc::new(Canned), Duration::from_secs(8));
        hud.handle(ShellEvent::ScoreUpdate { mass: 30, threats: 1 });
        hud.phase_changed();
        assert_eq!(settle(&mut hud).await, None);
        assert_eq!(hud.advice(), None);
    }

    #[tokio::test]
    async fn test_high_score() {
        let mut hud = Hud::new(Arc::new(Canned), Duration::from_secs(8));
        hud.handle(ShellEvent::GameOver { final_mass: 40 });
        hud.handle(ShellEvent::GameOver { final_mass: 31 });
        assert_eq!(hud.high_score(), 40);
        hud.finish_round(SessionStats {
            max_mass: 55,
            time_alive: 100,
            cells_eaten: 12,
        });
        assert_eq!(hud.high_score(), 55);
        assert_eq!(hud.mass(), 31);
    }
}
