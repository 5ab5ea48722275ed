pub mod ajustes_service;
