pub mod create_recommendations;
