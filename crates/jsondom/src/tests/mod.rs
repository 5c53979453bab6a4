mod access;
mod parse_good;
