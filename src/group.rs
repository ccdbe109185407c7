//! Progressive group reveal: partitions an effect's entities along an
//! axis and pours them in with staggered, speed-driven cursors.

use crate::scene::Entity;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupAxis {
    Row,
    Column,
    /// Anti-diagonal: cells sharing `x + y`.
    Diagonal,
}

#[derive(Debug, Clone, Copy)]
pub struct GroupConfig {
    /// Head plus this many trailing glyph variants behind it.
    pub beam_len: usize,
    /// Inclusive range of idle groups armed per tick.
    pub arm_per_tick: (usize, usize),
    /// Inclusive per-group speed range (entities revealed per tick).
    pub speed: (f32, f32),
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            beam_len: 4,
            arm_per_tick: (1, 5),
            speed: (0.5, 1.5),
        }
    }
}

/// Where a revealed entity sits relative to its group's beam head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeamRole {
    Head,
    /// 1-based distance behind the head, always `< beam_len`.
    Trail(usize),
    Settled,
}

impl BeamRole {
    pub fn for_offset(dist_from_head: usize, beam_len: usize) -> Self {
        if dist_from_head == 0 {
            Self::Head
        } else if dist_from_head < beam_len.max(1) {
            Self::Trail(dist_from_head)
        } else {
            Self::Settled
        }
    }
}

#[derive(Debug, Clone)]
pub struct Group {
    /// Entity ids in reveal order.
    pub members: Vec<usize>,
    pub speed: f32,
    cursor: f32,
    revealed: usize,
    armed: bool,
}

impl Group {
    fn new(members: Vec<usize>, speed: f32) -> Self {
        Self {
            members,
            // Zero or negative speed would never terminate.
            speed: speed.max(0.05),
            cursor: 0.0,
            revealed: 0,
            armed: false,
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.members.len()
    }

    pub fn role_of(&self, reveal_index: usize, beam_len: usize) -> BeamRole {
        debug_assert!(reveal_index < self.revealed);
        BeamRole::for_offset(self.revealed - 1 - reveal_index, beam_len)
    }
}

pub struct GroupScheduler {
    groups: Vec<Group>,
    cfg: GroupConfig,
}

impl GroupScheduler {
    /// Bucket `entities` by `axis`, order each bucket by the orthogonal
    /// coordinate (half of them reversed), shuffle the bucket order, and
    /// stamp each entity's `group` index.
    pub fn build(
        entities: &mut [Entity],
        axis: GroupAxis,
        cfg: GroupConfig,
        rng: &mut fastrand::Rng,
    ) -> Self {
        let mut buckets: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
        for e in entities.iter() {
            let key = match axis {
                GroupAxis::Row => e.origin.1,
                GroupAxis::Column => e.origin.0,
                GroupAxis::Diagonal => e.origin.0 + e.origin.1,
            };
            buckets.entry(key).or_default().push(e.id);
        }

        let mut groups: Vec<Group> = Vec::with_capacity(buckets.len());
        for (_, mut ids) in buckets {
            ids.sort_by_key(|&id| match axis {
                GroupAxis::Row | GroupAxis::Diagonal => entities[id].origin.0,
                GroupAxis::Column => entities[id].origin.1,
            });
            if rng.bool() {
                ids.reverse();
            }
            let (smin, smax) = cfg.speed;
            let speed = smin + rng.f32() * (smax - smin).max(0.0);
            groups.push(Group::new(ids, speed));
        }
        rng.shuffle(&mut groups);

        for (gi, g) in groups.iter().enumerate() {
            for &id in &g.members {
                entities[id].group = gi;
            }
        }
        Self { groups, cfg }
    }

    /// Single fixed group in given order; used for tests and simple pours.
    pub fn single(members: Vec<usize>, speed: f32, cfg: GroupConfig) -> Self {
        let mut g = Group::new(members, speed);
        g.armed = true;
        Self {
            groups: vec![g],
            cfg,
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn config(&self) -> &GroupConfig {
        &self.cfg
    }

    pub fn all_complete(&self) -> bool {
        self.groups.iter().all(Group::is_complete)
    }

    /// Advance one tick: arm a random handful of idle groups, then pour
    /// each armed group's cursor. Returns entity ids newly revealed this
    /// tick, in reveal order.
    pub fn tick(&mut self, rng: &mut fastrand::Rng) -> Vec<usize> {
        let (amin, amax) = self.cfg.arm_per_tick;
        let mut to_arm = rng.usize(amin.max(1)..=amax.max(amin.max(1)));
        for g in self.groups.iter_mut() {
            if to_arm == 0 {
                break;
            }
            if !g.armed {
                g.armed = true;
                to_arm -= 1;
            }
        }

        let mut revealed = Vec::new();
        for g in self.groups.iter_mut() {
            if !g.armed || g.is_complete() {
                continue;
            }
            g.cursor += g.speed;
            let whole = g.cursor.floor();
            g.cursor -= whole;
            let n = (whole as usize).min(g.members.len() - g.revealed);
            for _ in 0..n {
                revealed.push(g.members[g.revealed]);
                g.revealed += 1;
            }
        }
        revealed
    }

    pub fn reset(&mut self) {
        for g in &mut self.groups {
            g.cursor = 0.0;
            g.revealed = 0;
            g.armed = false;
        }
    }
}
