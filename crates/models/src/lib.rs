pub mod child;
pub mod db;
pub mod errors;

pub mod banner;
pub mod category;
pub mod service;
pub mod settings;

pub mod case_before_after;
pub mod chemical_item;
pub mod client_company;
pub mod document;
pub mod equipment_item;
pub mod excluded_item;
pub mod faq_item;
pub mod price_item;
pub mod requirement_item;
pub mod work_condition_item;
pub mod zone_item;
