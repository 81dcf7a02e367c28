//! Training report generation.

use super::network::NetworkGenome;
use serde::Serialize;

/// Fitness summary for one evaluated generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationStats {
    pub generation: u32,
    pub best_fitness: f64,
    pub mean_fitness: f64,
    pub worst_fitness: f64,
    /// Pipes passed by the flock
    pub score: u32,
    pub ticks: u64,
}

impl GenerationStats {
    pub fn from_fitness(generation: u32, fitness: &[f64], score: u32, ticks: u64) -> Self {
        let count = fitness.len().max(1) as f64;
        Self {
            generation,
            best_fitness: fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            mean_fitness: fitness.iter().sum::<f64>() / count,
            worst_fitness: fitness.iter().copied().fold(f64::INFINITY, f64::min),
            score,
            ticks,
        }
    }
}

/// Outcome of a training run.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    pub generations: Vec<GenerationStats>,
    /// Fittest genome seen in any generation
    pub best_genome: Option<NetworkGenome>,
    /// The fitness threshold was reached
    pub solved: bool,
    /// The run was stopped by the user
    pub interrupted: bool,
}

impl TrainingReport {
    pub fn best_fitness(&self) -> Option<f64> {
        self.best_genome.as_ref().map(|genome| genome.fitness)
    }

    pub fn best_score(&self) -> u32 {
        self.generations.iter().map(|g| g.score).max().unwrap_or(0)
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                      TRAINING REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        let outcome = if self.solved {
            "threshold reached"
        } else if self.interrupted {
            "interrupted"
        } else {
            "generation limit reached"
        };
        report.push_str(&format!(
            "Generations: {} ({})\n\n",
            self.generations.len(),
            outcome
        ));

        report.push_str("── GENERATIONS ──────────────────────────────────────────────────\n");
        report.push_str("   Gen      Best      Mean     Worst   Score    Ticks\n");
        report.push_str("  ────   ───────   ───────   ───────   ─────   ──────\n");
        for stats in &self.generations {
            report.push_str(&format!(
                "  {:4}   {:7.1}   {:7.1}   {:7.1}   {:5}   {:6}\n",
                stats.generation,
                stats.best_fitness,
                stats.mean_fitness,
                stats.worst_fitness,
                stats.score,
                stats.ticks
            ));
        }
        report.push('\n');

        report.push_str("── BEST GENOME ──────────────────────────────────────────────────\n");
        match &self.best_genome {
            Some(genome) => {
                report.push_str(&format!("  Id:          {}\n", genome.id));
                report.push_str(&format!("  Fitness:     {:.1}\n", genome.fitness));
                report.push_str(&format!("  Activation:  {}\n", genome.activation.name()));
                report.push_str(&format!("  Hidden:      {}\n", genome.hidden.len()));
                report.push_str(&format!(
                    "  Connections: {}\n",
                    genome.connection_count()
                ));
            }
            None => report.push_str("  (no generation completed)\n"),
        }
        report.push_str(&format!("  Best Score:  {}\n", self.best_score()));

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::EvolutionConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sample_report() -> TrainingReport {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut best = NetworkGenome::random(12, &EvolutionConfig::default(), &mut rng);
        best.fitness = 18.4;
        TrainingReport {
            generations: vec![
                GenerationStats::from_fitness(0, &[3.0, 1.0, 2.0], 0, 40),
                GenerationStats::from_fitness(1, &[18.4, 6.0], 2, 180),
            ],
            best_genome: Some(best),
            solved: false,
            interrupted: false,
        }
    }

    #[test]
    fn test_generation_stats() {
        let stats = GenerationStats::from_fitness(3, &[3.0, 1.0, 2.0], 1, 40);
        assert!((stats.best_fitness - 3.0).abs() < f64::EPSILON);
        assert!((stats.mean_fitness - 2.0).abs() < f64::EPSILON);
        assert!((stats.worst_fitness - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_text() {
        let report = sample_report();
        let text = report.to_text();
        assert!(text.contains("TRAINING REPORT"));
        assert!(text.contains("Generations: 2 (generation limit reached)"));
        assert!(text.contains("Id:          12"));
        assert_eq!(report.best_score(), 2);
        assert_eq!(report.best_fitness(), Some(18.4));
    }

    #[test]
    fn test_report_json() {
        let json = sample_report().to_json();
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["generations"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["best_genome"]["id"], 12);
        assert_eq!(value["solved"], false);
    }

    #[test]
    fn test_empty_report() {
        let report = TrainingReport {
            generations: Vec::new(),
            best_genome: None,
            solved: false,
            interrupted: true,
        };
        assert!(report.to_text().contains("(interrupted)"));
        assert!(report.to_text().contains("no generation completed"));
        assert_eq!(report.best_fitness(), None);
    }
}
