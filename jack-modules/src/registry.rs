//! # Registry
//!
//! Units known to the harness, by name.
use anyhow::Result;
use fnv::FnvHashMap;
use synth_modules::prelude::*;

#[derive(Default)]
pub struct Registry {
    units: FnvHashMap<&'static str, Unit>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Registry with every unit the harness can run.
    pub fn load() -> Result<Self> {
        let mut registry = Registry::new();
        registry.register(RampUpGen::UNIT)?;
        Ok(registry)
    }

    /// Register `unit` under its name. Names are unique.
    pub fn register(&mut self, unit: Unit) -> Result<()> {
        if self.units.contains_key(unit.name) {
            bail!("Unit `{}` is already registered.", unit.name);
        }
        debug!("Registered unit `{}` (pure: {}).", unit.name, unit.pure);
        self.units.insert(unit.name, unit);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.units.get(name)
    }

    /// Look `name` up, failing with a list of what is available.
    pub fn resolve(&self, name: &str) -> Result<&Unit> {
        self.get(name).ok_or_else(|| {
            let mut known = self.units.keys().cloned().collect::<Vec<_>>();
            known.sort();
            anyhow!("Unit `{}` is not registered (known: {}).", name, known.join(", "))
        })
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }
}
