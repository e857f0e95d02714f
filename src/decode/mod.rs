pub(crate) mod gif_stream;
