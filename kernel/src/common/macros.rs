macro_rules! hlt_cpu {
  () => {
    loop {
      ::x86_64::instructions::hlt();
    }
  }
}
