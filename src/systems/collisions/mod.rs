mod ground_contact;
mod query_terrain;

pub use ground_contact::{ContactOutcome, GroundContactResolver, LandingQuality, Touchdown};
pub use query_terrain::{query_ground, GroundSample, SurfaceType};
