use crate::classifier::AnalysisResult;
use crate::dosha::Dosha;
use serde::Serialize;

/// How often each dosha came out dominant across a set of readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DoshaDistribution {
    pub vata: u32,
    pub pitta: u32,
    pub kapha: u32,
}

impl DoshaDistribution {
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a AnalysisResult>,
    {
        let mut dist = Self::default();
        for result in results {
            dist.record(result.dosha);
        }
        dist
    }

    pub fn record(&mut self, dosha: Dosha) {
        match dosha {
            Dosha::Vata => self.vata += 1,
            Dosha::Pitta => self.pitta += 1,
            Dosha::Kapha => self.kapha += 1,
        }
    }

    pub fn count(&self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn total(&self) -> u32 {
        self.vata + self.pitta + self.kapha
    }

    /// Rounded percent of readings with this dosha dominant; 0 when empty.
    pub fn share(&self, dosha: Dosha) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (f64::from(self.count(dosha)) / f64::from(total) * 100.0).round() as u8
    }

    /// Most frequent dosha, earlier declaration order winning ties.
    pub fn dominant(&self) -> Option<Dosha> {
        if self.total() == 0 {
            return None;
        }
        let mut best = Dosha::Vata;
        for dosha in [Dosha::Pitta, Dosha::Kapha] {
            if self.count(dosha) > self.count(best) {
                best = dosha;
            }
        }
        Some(best)
    }
}
