//! Profile data structures and batch loading

mod data;
pub mod loader;

pub use data::{
    Alcohol, AtrophicGastritis, Diet, Exercise, Polypharmacy, Profile, Pylori, Sex, Sleep,
    Smoking, Social,
};
pub use loader::{load_profile_json, load_profiles, load_profiles_from_reader};
