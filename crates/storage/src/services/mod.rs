pub mod comparison;
pub mod elo;
pub mod matchmaking;
pub mod rankings;
