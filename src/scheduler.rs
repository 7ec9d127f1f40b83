//! Timers and animation frames as data.
//!
//! The controller never talks to `setTimeout` or `requestAnimationFrame`
//! directly. It records tasks here; the host driver takes the pending
//! [`Arm`] requests and calls back with [`Timeline::take_timer`] or
//! [`Timeline::take_frame_tasks`] when the real timer or frame fires. Tests
//! skip the driver and walk a virtual clock instead.

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arm {
    Timer { id: TimerId, delay_ms: u32 },
    Frame,
}

struct PendingTimer<T> {
    id: TimerId,
    due_ms: u64,
    task: T,
}

pub struct Timeline<T> {
    now_ms: u64,
    next_id: u64,
    timers: Vec<PendingTimer<T>>,
    frame_tasks: Vec<T>,
    arms: Vec<Arm>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_id: 1,
            timers: Vec::new(),
            frame_tasks: Vec::new(),
            arms: Vec::new(),
        }
    }
}

impl<T> Timeline<T> {
    pub fn schedule(&mut self, delay_ms: u32, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(PendingTimer {
            id,
            due_ms: self.now_ms + u64::from(delay_ms),
            task,
        });
        self.arms.push(Arm::Timer { id, delay_ms });
        id
    }

    pub fn request_frame(&mut self, task: T) {
        self.frame_tasks.push(task);
        self.arms.push(Arm::Frame);
    }

    pub fn take_arms(&mut self) -> Vec<Arm> {
        std::mem::take(&mut self.arms)
    }

    pub fn take_timer(&mut self, id: TimerId) -> Option<T> {
        let index = self.timers.iter().position(|timer| timer.id == id)?;
        Some(self.timers.remove(index).task)
    }

    pub fn take_frame_tasks(&mut self) -> Vec<T> {
        std::mem::take(&mut self.frame_tasks)
    }

    #[cfg(test)]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    #[cfg(test)]
    pub fn has_pending_frame(&self) -> bool {
        !self.frame_tasks.is_empty()
    }

    #[cfg(test)]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Pops the earliest timer due at or before `until_ms` and moves the
    /// clock to its due time. Ties go to the timer scheduled first.
    #[cfg(test)]
    pub fn pop_due(&mut self, until_ms: u64) -> Option<T> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= until_ms)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.id))
            .map(|(index, _)| index)?;

        let timer = self.timers.remove(index);
        self.now_ms = self.now_ms.max(timer.due_ms);
        Some(timer.task)
    }

    #[cfg(test)]
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}
