use std::fmt;

/// Phase de la mission. L'ordre des variantes est l'ordre de progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MissionState {
    PreLaunch,
    Countdown,
    Launch,
    Orbit,
    MissionComplete,
}

impl fmt::Display for MissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MissionState::PreLaunch => "PRE-LAUNCH",
            MissionState::Countdown => "COUNTDOWN",
            MissionState::Launch => "LAUNCH",
            MissionState::Orbit => "ORBIT",
            MissionState::MissionComplete => "MISSION COMPLETE",
        };
        f.write_str(label)
    }
}

/// Résultat d'un tick du compte à rebours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    Idle,
    Waiting,
    Step(u32),
    Liftoff,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mission {
    state: MissionState,
    pub countdown: u32,
    countdown_start: u32,
    /// Ticks écoulés depuis le dernier pas du compte à rebours
    countdown_timer: u32,
    pub success: bool,
}

impl Mission {
    pub fn new(countdown_start: u32) -> Self {
        Self {
            state: MissionState::PreLaunch,
            countdown: countdown_start,
            countdown_start,
            countdown_timer: 0,
            success: false,
        }
    }

    pub fn state(&self) -> MissionState {
        self.state
    }

    /// Fait progresser la mission ; une transition vers une phase antérieure est ignorée.
    /// Retourne `true` si l'état a changé.
    pub fn advance(&mut self, next: MissionState) -> bool {
        if next > self.state {
            self.state = next;
            true
        } else {
            false
        }
    }

    /// PRE-LAUNCH → COUNTDOWN. Sans effet dans toute autre phase.
    pub fn start_countdown(&mut self) -> bool {
        if self.state != MissionState::PreLaunch {
            return false;
        }
        self.countdown = self.countdown_start;
        self.countdown_timer = 0;
        self.advance(MissionState::Countdown)
    }

    /// Un tick de compte à rebours : décrémente toutes les `ticks_per_step` ticks.
    pub fn tick_countdown(&mut self, ticks_per_step: u32) -> CountdownTick {
        if self.state != MissionState::Countdown || self.countdown == 0 {
            return CountdownTick::Idle;
        }
        self.countdown_timer += 1;
        if self.countdown_timer < ticks_per_step.max(1) {
            return CountdownTick::Waiting;
        }
        self.countdown_timer = 0;
        self.countdown -= 1;
        if self.countdown == 0 {
            self.advance(MissionState::Launch);
            CountdownTick::Liftoff
        } else {
            CountdownTick::Step(self.countdown)
        }
    }

    /// Objectif atteint : passage terminal en MISSION COMPLETE
    pub fn complete(&mut self) -> bool {
        if self.success {
            return false;
        }
        self.success = true;
        self.advance(MissionState::MissionComplete)
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.countdown_start);
    }
}
