pub mod openai_transcriber;
