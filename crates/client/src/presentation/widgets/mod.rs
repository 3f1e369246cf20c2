pub mod combatant;
pub mod header;
pub mod messages;
