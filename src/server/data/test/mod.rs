mod course;
mod instructor;
