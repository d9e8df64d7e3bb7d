pub mod main_thread;
