//! Intcode virtual machine shared by days 2, 5, 7, 9, 11 and 13
//!
//! One VM covers every program in the set: `i64` cells, growable memory
//! (reads past the end yield 0), parameter modes position/immediate/
//! relative, and a FIFO input queue with an optional sticky fallback
//! value for programs polled faster than they are fed (day 13's
//! joystick).

use puzzle_solver::{ParseError, SolveError};
use std::collections::VecDeque;
use thiserror::Error;

/// Faults an Intcode program can hit at runtime
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntcodeError {
    /// Instruction decoded to an opcode the machine doesn't know
    #[error("unknown opcode {opcode} at position {position}")]
    UnknownOpcode { opcode: i64, position: usize },
    /// Parameter mode digit outside 0..=2
    #[error("invalid parameter mode {mode} at position {position}")]
    InvalidMode { mode: i64, position: usize },
    /// Write parameter given in immediate mode
    #[error("write parameter in immediate mode at position {0}")]
    ImmediateWrite(usize),
    /// Address or jump target resolved to a negative value
    #[error("negative address {0}")]
    NegativeAddress(i64),
    /// Input opcode executed with an empty queue and no default input
    #[error("input requested but none available")]
    InputExhausted,
}

impl From<IntcodeError> for SolveError {
    fn from(e: IntcodeError) -> Self {
        SolveError::SolveFailed(Box::new(e))
    }
}

/// Parse a comma-separated Intcode program
pub fn parse_program(input: &str) -> Result<Vec<i64>, ParseError> {
    let line = input
        .lines()
        .next()
        .ok_or_else(|| ParseError::MissingData("empty program".into()))?;

    line.trim()
        .split(',')
        .map(|tok| {
            tok.trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat(format!("bad intcode cell: {tok:?}")))
        })
        .collect()
}

enum Step {
    Continue,
    Output(i64),
    Halted,
}

/// An Intcode machine: program memory plus execution state
#[derive(Debug, Clone)]
pub struct Intcode {
    mem: Vec<i64>,
    pc: usize,
    relative_base: i64,
    inputs: VecDeque<i64>,
    default_input: Option<i64>,
    halted: bool,
}

impl Intcode {
    pub fn new(program: &[i64]) -> Self {
        Self {
            mem: program.to_vec(),
            pc: 0,
            relative_base: 0,
            inputs: VecDeque::new(),
            default_input: None,
            halted: false,
        }
    }

    pub fn with_inputs(program: &[i64], inputs: &[i64]) -> Self {
        let mut vm = Self::new(program);
        vm.inputs.extend(inputs);
        vm
    }

    /// Queue a value for the next input opcodes
    pub fn push_input(&mut self, value: i64) {
        self.inputs.push_back(value);
    }

    /// Value the input opcode falls back to when the queue is empty
    pub fn set_default_input(&mut self, value: i64) {
        self.default_input = Some(value);
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Read a memory cell; cells past the end read as 0
    pub fn read(&self, addr: usize) -> i64 {
        self.mem.get(addr).copied().unwrap_or(0)
    }

    /// Write a memory cell, growing memory as needed
    pub fn write(&mut self, addr: usize, value: i64) {
        if addr >= self.mem.len() {
            self.mem.resize(addr + 1, 0);
        }
        self.mem[addr] = value;
    }

    /// Run to the halt opcode, returning the last output (if any)
    pub fn run(&mut self) -> Result<Option<i64>, IntcodeError> {
        let mut last_output = None;
        while let Some(output) = self.run_until_output()? {
            last_output = Some(output);
        }
        Ok(last_output)
    }

    /// Run to the halt opcode, collecting every output
    pub fn run_collect(&mut self) -> Result<Vec<i64>, IntcodeError> {
        let mut outputs = Vec::new();
        while let Some(output) = self.run_until_output()? {
            outputs.push(output);
        }
        Ok(outputs)
    }

    /// Run until the next output; `None` once the program has halted
    pub fn run_until_output(&mut self) -> Result<Option<i64>, IntcodeError> {
        while !self.halted {
            match self.step()? {
                Step::Continue => {}
                Step::Output(value) => return Ok(Some(value)),
                Step::Halted => break,
            }
        }
        Ok(None)
    }

    fn step(&mut self) -> Result<Step, IntcodeError> {
        let instruction = self.read(self.pc);
        let opcode = instruction % 100;
        let modes = instruction / 100;

        match opcode {
            // add
            1 => {
                let result = self.param(1, modes)? + self.param(2, modes)?;
                let dst = self.write_addr(3, modes)?;
                self.write(dst, result);
                self.pc += 4;
            }
            // multiply
            2 => {
                let result = self.param(1, modes)? * self.param(2, modes)?;
                let dst = self.write_addr(3, modes)?;
                self.write(dst, result);
                self.pc += 4;
            }
            // input
            3 => {
                let value = self
                    .inputs
                    .pop_front()
                    .or(self.default_input)
                    .ok_or(IntcodeError::InputExhausted)?;
                let dst = self.write_addr(1, modes)?;
                self.write(dst, value);
                self.pc += 2;
            }
            // output
            4 => {
                let value = self.param(1, modes)?;
                self.pc += 2;
                return Ok(Step::Output(value));
            }
            // jump-if-true
            5 => {
                if self.param(1, modes)? != 0 {
                    self.pc = self.jump_target(2, modes)?;
                } else {
                    self.pc += 3;
                }
            }
            // jump-if-false
            6 => {
                if self.param(1, modes)? == 0 {
                    self.pc = self.jump_target(2, modes)?;
                } else {
                    self.pc += 3;
                }
            }
            // less-than
            7 => {
                let result = i64::from(self.param(1, modes)? < self.param(2, modes)?);
                let dst = self.write_addr(3, modes)?;
                self.write(dst, result);
                self.pc += 4;
            }
            // equals
            8 => {
                let result = i64::from(self.param(1, modes)? == self.param(2, modes)?);
                let dst = self.write_addr(3, modes)?;
                self.write(dst, result);
                self.pc += 4;
            }
            // adjust relative base
            9 => {
                self.relative_base += self.param(1, modes)?;
                self.pc += 2;
            }
            99 => {
                self.halted = true;
                return Ok(Step::Halted);
            }
            _ => {
                return Err(IntcodeError::UnknownOpcode {
                    opcode,
                    position: self.pc,
                });
            }
        }

        Ok(Step::Continue)
    }

    fn mode_of(&self, nth: u32, modes: i64) -> Result<i64, IntcodeError> {
        let mode = (modes / 10i64.pow(nth - 1)) % 10;
        if (0..=2).contains(&mode) {
            Ok(mode)
        } else {
            Err(IntcodeError::InvalidMode {
                mode,
                position: self.pc,
            })
        }
    }

    /// Resolve the nth parameter of the current instruction to a value
    fn param(&self, nth: u32, modes: i64) -> Result<i64, IntcodeError> {
        let raw = self.read(self.pc + nth as usize);
        let value = match self.mode_of(nth, modes)? {
            0 => self.read(to_addr(raw)?),
            1 => raw,
            _ => self.read(to_addr(raw + self.relative_base)?),
        };
        Ok(value)
    }

    /// Resolve the nth parameter to a write destination
    fn write_addr(&self, nth: u32, modes: i64) -> Result<usize, IntcodeError> {
        let raw = self.read(self.pc + nth as usize);
        match self.mode_of(nth, modes)? {
            0 => to_addr(raw),
            1 => Err(IntcodeError::ImmediateWrite(self.pc)),
            _ => to_addr(raw + self.relative_base),
        }
    }

    fn jump_target(&self, nth: u32, modes: i64) -> Result<usize, IntcodeError> {
        to_addr(self.param(nth, modes)?)
    }
}

fn to_addr(value: i64) -> Result<usize, IntcodeError> {
    usize::try_from(value).map_err(|_| IntcodeError::NegativeAddress(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(src: &str) -> Vec<i64> {
        parse_program(src).unwrap()
    }

    #[test]
    fn add_and_multiply_position_mode() {
        let mut vm = Intcode::new(&program("1,9,10,3,2,3,11,0,99,30,40,50"));
        vm.run().unwrap();
        assert_eq!(vm.read(0), 3500);
        assert!(vm.is_halted());
    }

    #[test]
    fn immediate_mode_multiply() {
        // 1002,4,3,4,33: mem[4] = 33 * 3 = 99, then halt on it
        let mut vm = Intcode::new(&program("1002,4,3,4,33"));
        vm.run().unwrap();
        assert_eq!(vm.read(4), 99);
    }

    #[test]
    fn echo_program() {
        let mut vm = Intcode::with_inputs(&program("3,0,4,0,99"), &[42]);
        assert_eq!(vm.run().unwrap(), Some(42));
    }

    #[test]
    fn equals_position_mode() {
        let prog = program("3,9,8,9,10,9,4,9,99,-1,8");
        let mut vm = Intcode::with_inputs(&prog, &[8]);
        assert_eq!(vm.run().unwrap(), Some(1));
        let mut vm = Intcode::with_inputs(&prog, &[7]);
        assert_eq!(vm.run().unwrap(), Some(0));
    }

    #[test]
    fn less_than_immediate_mode() {
        let prog = program("3,3,1107,-1,8,3,4,3,99");
        let mut vm = Intcode::with_inputs(&prog, &[3]);
        assert_eq!(vm.run().unwrap(), Some(1));
        let mut vm = Intcode::with_inputs(&prog, &[9]);
        assert_eq!(vm.run().unwrap(), Some(0));
    }

    #[test]
    fn jump_chooses_branch() {
        // Outputs 0 when input is 0, 1 otherwise
        let prog = program("3,12,6,12,15,1,13,14,13,4,13,99,-1,0,1,9");
        let mut vm = Intcode::with_inputs(&prog, &[0]);
        assert_eq!(vm.run().unwrap(), Some(0));
        let mut vm = Intcode::with_inputs(&prog, &[5]);
        assert_eq!(vm.run().unwrap(), Some(1));
    }

    #[test]
    fn relative_base_addressing() {
        // Base moves to 5, then a relative output lands back on cell 0
        let mut vm = Intcode::new(&program("109,5,204,-5,99"));
        assert_eq!(vm.run_collect().unwrap(), vec![109]);
    }

    #[test]
    fn memory_grows_on_read_and_write() {
        // Reads untouched cell 20 as 0, writes the sum far past the program
        let mut vm = Intcode::new(&program("1001,20,7,30,4,30,99"));
        assert_eq!(vm.run().unwrap(), Some(7));
        assert_eq!(vm.read(30), 7);
    }

    #[test]
    fn sixteen_digit_output() {
        let mut vm = Intcode::new(&program("1102,34915192,34915192,7,4,7,99,0"));
        let output = vm.run().unwrap().unwrap();
        assert_eq!(output.to_string().len(), 16);
    }

    #[test]
    fn large_immediate_value() {
        let mut vm = Intcode::new(&program("104,1125899906842624,99"));
        assert_eq!(vm.run().unwrap(), Some(1125899906842624));
    }

    #[test]
    fn default_input_is_sticky() {
        // Two input reads, only a default provided
        let mut vm = Intcode::new(&program("3,11,3,12,1,11,12,13,4,13,99,0,0,0"));
        vm.set_default_input(21);
        assert_eq!(vm.run().unwrap(), Some(42));
    }

    #[test]
    fn queued_input_takes_priority_over_default() {
        let mut vm = Intcode::new(&program("3,0,4,0,99"));
        vm.set_default_input(1);
        vm.push_input(7);
        assert_eq!(vm.run().unwrap(), Some(7));
    }

    #[test]
    fn input_exhausted_is_an_error() {
        let mut vm = Intcode::new(&program("3,0,99"));
        assert!(matches!(vm.run(), Err(IntcodeError::InputExhausted)));
    }

    #[test]
    fn unknown_opcode_is_an_error() {
        let mut vm = Intcode::new(&program("77,0,0,0"));
        assert!(matches!(
            vm.run(),
            Err(IntcodeError::UnknownOpcode {
                opcode: 77,
                position: 0
            })
        ));
    }

    #[test]
    fn run_until_output_none_after_halt() {
        let mut vm = Intcode::new(&program("104,5,99"));
        assert_eq!(vm.run_until_output().unwrap(), Some(5));
        assert_eq!(vm.run_until_output().unwrap(), None);
        assert_eq!(vm.run_until_output().unwrap(), None);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_program("1,2,x").is_err());
    }
}
