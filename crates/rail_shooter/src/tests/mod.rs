//! Multi-component scenarios for the stage

mod scene_scenarios;
