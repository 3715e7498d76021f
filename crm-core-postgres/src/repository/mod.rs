pub mod crm;
pub mod db_init;
