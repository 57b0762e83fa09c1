use itertools::{Itertools, MinMaxResult};
use log::info;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

/// Valeur de métrique typée (compteur ou flottant)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Usize(usize),
    F32(f32),
}

impl From<usize> for MetricValue {
    fn from(v: usize) -> Self {
        MetricValue::Usize(v)
    }
}
impl From<u32> for MetricValue {
    fn from(v: u32) -> Self {
        MetricValue::Usize(v as usize)
    }
}
impl From<f32> for MetricValue {
    fn from(v: f32) -> Self {
        MetricValue::F32(v)
    }
}

impl MetricValue {
    fn as_f32(self) -> f32 {
        match self {
            MetricValue::Usize(u) => u as f32,
            MetricValue::F32(v) => v,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Usize(u) => write!(f, "{}", u),
            MetricValue::F32(v) => write!(f, "{:.2}", v),
        }
    }
}

/// Moyenne, min, max d'une série
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub avg: f32,
    pub min: f32,
    pub max: f32,
    pub count: usize,
}

impl SeriesSummary {
    fn of(series: impl Iterator<Item = f32> + Clone) -> Option<Self> {
        let (min, max) = match series.clone().minmax() {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(v) => (v, v),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        let (sum, count) = series.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
        Some(Self {
            avg: sum / count as f32,
            min,
            max,
            count,
        })
    }
}

struct ProfilerInner {
    samples: HashMap<String, VecDeque<f32>>, // durées en ms (profile_block / measure)
    metrics: HashMap<String, VecDeque<MetricValue>>,
    frame_times: VecDeque<f32>,
    max_samples: usize,
}

fn push_capped<T>(buffer: &mut VecDeque<T>, value: T, cap: usize) {
    if buffer.len() >= cap {
        buffer.pop_front();
    }
    buffer.push_back(value);
}

/// Profiler partagé (clonable), fenêtres glissantes de `max_samples` valeurs par label.
#[derive(Clone)]
pub struct Profiler {
    inner: Arc<RwLock<ProfilerInner>>,
}

impl Profiler {
    pub fn new(max_samples: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ProfilerInner {
                samples: HashMap::new(),
                metrics: HashMap::new(),
                frame_times: VecDeque::with_capacity(max_samples),
                max_samples: max_samples.max(1),
            })),
        }
    }

    // Un panic pendant une mesure ne doit pas rendre le profiler inutilisable
    fn read(&self) -> RwLockReadGuard<'_, ProfilerInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ProfilerInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mesure globale d'une frame (RAII)
    pub fn frame(&self) -> FrameGuard {
        FrameGuard {
            profiler: self.clone(),
            start: Instant::now(),
        }
    }

    /// Mesure d'un bloc labelisé (RAII)
    pub fn measure(&self, label: impl Into<String>) -> MeasureGuard<'_> {
        MeasureGuard {
            profiler: self,
            label: label.into(),
            start: Instant::now(),
        }
    }

    fn record_duration(&self, label: String, ms: f32) {
        let mut inner = self.write();
        let cap = inner.max_samples;
        push_capped(inner.samples.entry(label).or_default(), ms, cap);
    }

    /// Enregistre une métrique scalaire typée
    pub fn record_metric<T: Into<MetricValue>>(&self, label: impl Into<String>, value: T) {
        let mut inner = self.write();
        let cap = inner.max_samples;
        push_capped(inner.metrics.entry(label.into()).or_default(), value.into(), cap);
    }

    /// Profile un bloc de code et retourne sa valeur de retour
    pub fn profile_block<T, F>(&self, label: impl Into<String>, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let result = f();
        self.record_duration(label.into(), start.elapsed().as_secs_f32() * 1000.0);
        result
    }

    /// FPS moyen sur la fenêtre glissante
    pub fn fps(&self) -> f32 {
        let inner = self.read();
        match SeriesSummary::of(inner.frame_times.iter().copied()) {
            Some(summary) if summary.avg > 0.0 => 1000.0 / summary.avg,
            _ => 0.0,
        }
    }

    /// Nombre de frames dans la fenêtre glissante
    pub fn total_frames(&self) -> usize {
        self.read().frame_times.len()
    }

    /// Résumé des temps mesurés (ms)
    pub fn summary(&self) -> HashMap<String, SeriesSummary> {
        let inner = self.read();
        inner
            .samples
            .iter()
            .filter_map(|(k, v)| SeriesSummary::of(v.iter().copied()).map(|s| (k.clone(), s)))
            .collect()
    }

    /// Résumé d'une métrique scalaire
    pub fn metric_summary(&self, label: &str) -> Option<SeriesSummary> {
        let inner = self.read();
        inner
            .metrics
            .get(label)
            .and_then(|v| SeriesSummary::of(v.iter().map(|m| m.as_f32())))
    }

    /// Dernière valeur enregistrée pour une métrique
    pub fn last_metric(&self, label: &str) -> Option<MetricValue> {
        self.read().metrics.get(label).and_then(|v| v.back().copied())
    }

    /// Log toutes les métriques vers l'info log avec un target spécifique
    pub fn log_metrics_for_target(&self, target: &str, show_fps: bool) {
        if show_fps {
            info!(target: target, "{:.2} FPS", self.fps());
        }
        for (label, s) in self.summary().into_iter().sorted_by(|a, b| a.0.cmp(&b.0)) {
            info!(
                target: target,
                "{}: avg = {:.3} ms | min = {:.3} ms | max = {:.3} ms",
                label, s.avg, s.min, s.max
            );
        }
        let labels: Vec<String> = self.read().metrics.keys().cloned().sorted().collect();
        for label in labels {
            if let (Some(s), Some(last)) = (self.metric_summary(&label), self.last_metric(&label)) {
                info!(
                    target: target,
                    "{label}: last={last}, avg={:.2}, min={:.2}, max={:.2}",
                    s.avg, s.min, s.max
                );
            }
        }
    }
}

/// Mesure globale d'une frame
pub struct FrameGuard {
    profiler: Profiler,
    start: Instant,
}

impl Drop for FrameGuard {
    fn drop(&mut self) {
        let dt = self.start.elapsed().as_secs_f32() * 1000.0;
        let mut inner = self.profiler.write();
        let cap = inner.max_samples;
        push_capped(&mut inner.frame_times, dt, cap);
    }
}

/// Mesure d'un bloc labelisé (RAII)
pub struct MeasureGuard<'a> {
    profiler: &'a Profiler,
    label: String,
    start: Instant,
}

impl Drop for MeasureGuard<'_> {
    fn drop(&mut self) {
        let dt = self.start.elapsed().as_secs_f32() * 1000.0;
        self.profiler
            .record_duration(std::mem::take(&mut self.label), dt);
    }
}

/// Macro helper : déduit automatiquement le target via le module appelant
#[macro_export]
macro_rules! log_metrics {
    ($profiler:expr) => {
        $profiler.log_metrics_for_target(module_path!(), false);
    };
}

#[macro_export]
macro_rules! log_metrics_and_fps {
    ($profiler:expr) => {
        $profiler.log_metrics_for_target(module_path!(), true);
    };
}
