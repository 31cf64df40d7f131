use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::generator::PlanGenerator;
use crate::models::{GenerationRequest, Plan};

/// Bounded map from request to plan; the oldest entry goes first.
#[derive(Debug)]
pub struct PlanCache {
    capacity: usize,
    entries: HashMap<GenerationRequest, Plan>,
    order: VecDeque<GenerationRequest>,
}

impl PlanCache {
    /// A capacity of zero disables caching.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn get(&self, request: &GenerationRequest) -> Option<&Plan> {
        self.entries.get(request)
    }

    pub fn insert(&mut self, request: GenerationRequest, plan: Plan) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.insert(request.clone(), plan).is_some() {
            return;
        }

        self.order.push_back(request);
        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

/// Wraps a generator and remembers its successful plans.
///
/// Errors and plans that fail [`Plan::validate`] are never cached, so a
/// retry reaches the inner generator.
#[derive(Debug)]
pub struct CachingGenerator<G> {
    inner: G,
    cache: Mutex<PlanCache>,
}

impl<G> CachingGenerator<G> {
    pub fn new(inner: G, capacity: usize) -> Self {
        Self {
            inner,
            cache: Mutex::new(PlanCache::new(capacity)),
        }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    pub fn cached(&self) -> usize {
        self.cache.lock().map(|c| c.len()).unwrap_or(0)
    }

    fn lookup(&self, request: &GenerationRequest) -> Option<Plan> {
        let cache = self.cache.lock().ok()?;
        cache.get(request).cloned()
    }

    fn remember(&self, request: &GenerationRequest, plan: &Plan) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(request.clone(), plan.clone());
        }
    }
}

#[async_trait]
impl<G: PlanGenerator> PlanGenerator for CachingGenerator<G> {
    async fn generate(&self, request: &GenerationRequest) -> Result<Plan> {
        if let Some(plan) = self.lookup(request) {
            debug!("plan cache hit");
            return Ok(plan);
        }

        let plan = self.inner.generate(request).await?;
        match plan.validate() {
            Ok(()) => self.remember(request, &plan),
            Err(e) => debug!(error = %e, "not caching malformed plan"),
        }
        Ok(plan)
    }
}
