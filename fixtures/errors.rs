let identificadormuylargo = 1;
let c = @;
let s = "sin cerrar
/* nunca cerrado
