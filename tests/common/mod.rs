//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use serde_json::Value;
use showroom::catalog::VehicleRecord;
use showroom::router::{NavigationHost, PopStateEvent};
use std::collections::VecDeque;
use std::path::PathBuf;
use tempfile::TempDir;

/// Minimal listing with every required attribute filled in.
pub fn vehicle(id: &str, make: &str, model: &str, price: u64) -> VehicleRecord {
    VehicleRecord {
        id: id.to_string(),
        make: make.to_string(),
        model: model.to_string(),
        grade: None,
        year: 2020,
        price,
        price_usd: None,
        mileage: 10_000,
        fuel: "Gasoline".to_string(),
        transmission: "AT".to_string(),
        drivetrain: "AWD".to_string(),
        engine: "2.5L".to_string(),
        doors: 4,
        seats: 5,
        color: "White".to_string(),
        interior_color: None,
        location: "Tokyo".to_string(),
        dealer: "Test Motors".to_string(),
        chassis_number: None,
        model_code: None,
        inspection_date: None,
        inspection_valid: None,
        condition: "Good".to_string(),
        condition_score: Some(4.0),
        views: 0,
        inquiries: None,
        last_updated: None,
        image: format!("/images/{id}.jpg"),
        rating: 4.0,
        is_favorite: false,
        body_type: "SUV".to_string(),
        features: Vec::new(),
        inspection_report: None,
        service_history: Vec::new(),
        images: Vec::new(),
    }
}

/// Writes `content` to `catalog.json` in a fresh temp dir.
pub fn temp_catalog(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.json");
    std::fs::write(&path, content).expect("Failed to write catalog");
    (temp_dir, path)
}

/// Writes `content` to `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Host whose events are injected by the test, recording every call the
/// router makes.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    pub pathname: String,
    pub state: Option<Value>,
    pub pushed: Vec<(Value, String)>,
    pub replaced: Vec<(Value, String)>,
    pub back_requests: usize,
    pub forward_requests: usize,
    pub events: VecDeque<PopStateEvent>,
}

impl ScriptedHost {
    pub fn at(pathname: &str) -> Self {
        Self {
            pathname: pathname.to_string(),
            ..Self::default()
        }
    }

    /// Simulates the host moving to `pathname` and firing pop-state.
    pub fn pop_to(&mut self, pathname: &str, state: Option<Value>) {
        self.pathname = pathname.to_string();
        self.state = state.clone();
        self.events.push_back(PopStateEvent { state });
    }
}

impl NavigationHost for ScriptedHost {
    fn pathname(&self) -> &str {
        &self.pathname
    }

    fn location(&self) -> &str {
        &self.pathname
    }

    fn entry_state(&self) -> Option<&Value> {
        self.state.as_ref()
    }

    fn push_state(&mut self, state: Value, location: &str) {
        self.pathname = location.to_string();
        self.state = Some(state.clone());
        self.pushed.push((state, location.to_string()));
    }

    fn replace_state(&mut self, state: Value, location: &str) {
        self.pathname = location.to_string();
        self.state = Some(state.clone());
        self.replaced.push((state, location.to_string()));
    }

    fn back(&mut self) {
        self.back_requests += 1;
    }

    fn forward(&mut self) {
        self.forward_requests += 1;
    }

    fn poll_pop_state(&mut self) -> Option<PopStateEvent> {
        self.events.pop_front()
    }
}
