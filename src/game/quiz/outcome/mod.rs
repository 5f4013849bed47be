
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Tier {
    // Thresholds are inclusive lower bounds.
    pub fn from_percentage(percentage: f64) -> Tier {
        if percentage >= 80.0 {
            Tier::Excellent
        } else if percentage >= 60.0 {
            Tier::Good
        } else if percentage >= 40.0 {
            Tier::Fair
        } else {
            Tier::Poor
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Fair => "fair",
            Tier::Poor => "poor",
        }
    }

    pub fn remark(&self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent! You're a quiz master!",
            Tier::Good => "Good job! You did well!",
            Tier::Fair => "Not bad, but you can do better!",
            Tier::Poor => "You need more practice!",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub score: u32,
    pub total: usize,
    pub percentage: f64,
    pub tier: Tier,
}

impl Outcome {
    pub fn new(score: u32, total: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            100.0 * f64::from(score) / total as f64
        };
        Outcome {
            score,
            total,
            percentage,
            tier: Tier::from_percentage(percentage),
        }
    }
}
