mod array;
mod primitive;
mod string;
mod vector;
