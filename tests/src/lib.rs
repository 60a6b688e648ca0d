mod pipeline;
mod supervisor;
