pub mod forecast_client;
