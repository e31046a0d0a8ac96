use crate::error::GradRustError;
use crate::nn::module::Module;
use crate::value::Value;

/// Ordered container: the output of each module is the input of the next.
#[derive(Debug, Default)]
pub struct Sequential {
    modules: Vec<(String, Box<dyn Module>)>,
}

impl Sequential {
    pub fn new() -> Self {
        Sequential {
            modules: Vec::new(),
        }
    }

    /// Appends a module under an explicit name.
    pub fn add_module(&mut self, name: &str, module: Box<dyn Module>) {
        self.modules.push((name.to_string(), module));
    }

    /// Appends a module named after its position.
    pub fn push(&mut self, module: Box<dyn Module>) {
        let name = self.modules.len().to_string();
        self.modules.push((name, module));
    }

    /// Builder form of [`Sequential::push`].
    pub fn with<M: Module + 'static>(mut self, module: M) -> Self {
        self.push(Box::new(module));
        self
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn modules_list(&self) -> impl Iterator<Item = &dyn Module> {
        self.modules.iter().map(|(_, m)| m.as_ref())
    }
}

impl From<Vec<Box<dyn Module>>> for Sequential {
    fn from(modules: Vec<Box<dyn Module>>) -> Self {
        let mut seq = Sequential::new();
        for module in modules {
            seq.push(module);
        }
        seq
    }
}

impl Module for Sequential {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradRustError> {
        let mut current_input = input.to_vec();
        for (_, module) in &self.modules {
            current_input = module.forward(&current_input)?;
        }
        Ok(current_input)
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = Vec::new();
        for (_, module) in &self.modules {
            params.extend(module.parameters());
        }
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params = Vec::new();
        for (name, module) in &self.modules {
            for (param_name, param) in module.named_parameters() {
                params.push((format!("{}.{}", name, param_name), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "sequential_test.rs"]
mod tests;
