/// A reveal the driver should perform after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledReveal {
    pub index: usize,
    pub delay_ms: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Hidden,
    Scheduled,
    Revealed,
}

/// One-shot reveal bookkeeping for a fixed set of marked elements.
///
/// An element moves Hidden -> Scheduled -> Revealed and never back.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    phases: Vec<Phase>,
    delay_step_ms: u32,
}

impl RevealTracker {
    pub fn new(len: usize, delay_step_ms: u32) -> Self {
        Self {
            phases: vec![Phase::Hidden; len],
            delay_step_ms,
        }
    }

    /// Takes the indices of intersecting elements in callback-batch order and
    /// returns the reveals to run. The stagger is the position within the
    /// batch; elements already scheduled or revealed are skipped.
    pub fn schedule(&mut self, batch: &[usize]) -> Vec<ScheduledReveal> {
        let mut out = Vec::new();
        for (position, &index) in batch.iter().enumerate() {
            if let Some(phase) = self.phases.get_mut(index) {
                if *phase == Phase::Hidden {
                    *phase = Phase::Scheduled;
                    out.push(ScheduledReveal {
                        index,
                        delay_ms: position as u32 * self.delay_step_ms,
                    });
                }
            }
        }
        out
    }

    /// Marks the element revealed. True only the first time.
    pub fn mark_revealed(&mut self, index: usize) -> bool {
        match self.phases.get_mut(index) {
            Some(phase) if *phase != Phase::Revealed => {
                *phase = Phase::Revealed;
                true
            }
            _ => false,
        }
    }

    /// Reveals everything at once, for reduced motion or missing observer support.
    pub fn reveal_all(&mut self) -> Vec<usize> {
        (0..self.phases.len())
            .filter(|&i| self.mark_revealed(i))
            .collect()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.phases.get(index) == Some(&Phase::Revealed)
    }
}
