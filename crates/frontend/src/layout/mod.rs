pub mod topbar;
