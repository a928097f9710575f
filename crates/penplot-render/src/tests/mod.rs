mod bar;
mod pie;
