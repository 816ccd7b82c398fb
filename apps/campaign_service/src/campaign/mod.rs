pub mod campaign_controller;
